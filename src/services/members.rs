//! Member management service

use crate::{
    error::AppResult,
    models::member::{CreateMember, Member, MemberFilter, NewMember, UpdateMember},
    repository::Repository,
};

use super::today;

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn search_members(&self, filter: &MemberFilter) -> AppResult<Vec<Member>> {
        let members = self.repository.read().await.members_search(filter);
        tracing::debug!("Member search {:?} matched {} members", filter, members.len());
        Ok(members)
    }

    pub async fn get_member(&self, id: i32) -> AppResult<Member> {
        Ok(self.repository.read().await.members_get(id)?.clone())
    }

    /// Register a new member; status starts as `active`
    pub async fn create_member(&self, data: CreateMember) -> AppResult<Member> {
        let data = NewMember::try_from(data)?;
        let member = self.repository.write().await.members_create(data, today())?;
        tracing::info!("Member {} registered ({})", member.id, member.email);
        Ok(member)
    }

    pub async fn update_member(&self, id: i32, data: UpdateMember) -> AppResult<Member> {
        let member = self.repository.write().await.members_update(id, data)?;
        tracing::info!("Member {} updated (status {})", id, member.status);
        Ok(member)
    }
}
