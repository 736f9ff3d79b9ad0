//! Member operations on the store

use chrono::NaiveDate;

use super::Store;
use crate::{
    error::{AppError, AppResult},
    models::member::{Member, MemberFilter, MemberStatus, NewMember, UpdateMember, DEFAULT_ROLE},
};

impl Store {
    /// Get member by ID
    pub fn members_get(&self, id: i32) -> AppResult<&Member> {
        self.members
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))
    }

    fn email_taken(&self, email: &str) -> bool {
        self.members.values().any(|m| m.email == email)
    }

    pub(super) fn insert_member(&mut self, data: NewMember, membership_date: NaiveDate) -> Member {
        let member = Member {
            id: self.member_ids.next_id(),
            name: data.name,
            email: data.email,
            membership_date,
            status: MemberStatus::Active,
            role: DEFAULT_ROLE.to_string(),
        };
        self.members.insert(member.id, member.clone());
        member
    }

    /// Register an active member, rejecting a duplicate email
    pub fn members_create(&mut self, data: NewMember, membership_date: NaiveDate) -> AppResult<Member> {
        if self.email_taken(&data.email) {
            return Err(AppError::Conflict("Member with this email already exists".to_string()));
        }
        Ok(self.insert_member(data, membership_date))
    }

    /// Apply a partial update. An email collision leaves the member untouched.
    pub fn members_update(&mut self, id: i32, data: UpdateMember) -> AppResult<Member> {
        let current = self.members_get(id)?;

        let new_email = data
            .email
            .filter(|email| !email.is_empty() && *email != current.email);
        if let Some(email) = &new_email {
            if self.email_taken(email) {
                return Err(AppError::Conflict("Another member with this email exists".to_string()));
            }
        }

        let member = self
            .members
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))?;

        if let Some(email) = new_email {
            member.email = email;
        }
        if let Some(name) = data.name {
            member.name = name;
        }
        if let Some(status) = data.status {
            member.status = status;
        }
        if let Some(role) = data.role {
            member.role = role;
        }

        Ok(member.clone())
    }

    /// Search members
    pub fn members_search(&self, filter: &MemberFilter) -> Vec<Member> {
        let mut members: Vec<Member> = self.members.values().cloned().collect();

        if let Some(email) = &filter.email {
            let needle = email.to_lowercase();
            members.retain(|m| m.email.to_lowercase().contains(&needle));
        }

        if let Some(name) = &filter.name {
            let needle = name.to_lowercase();
            members.retain(|m| m.name.to_lowercase().contains(&needle));
        }

        if let Some(active) = filter.active {
            members.retain(|m| m.status.is_active() == active);
        }

        members
    }
}
