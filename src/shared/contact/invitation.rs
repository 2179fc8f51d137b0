//! Invitation Statistics
//!
//! Returned after inviting a batch of email addresses to the network. Each
//! address ends up in exactly one bucket: invited, already invited, already
//! a member, or invalid.

use crate::json::{
    resource_serde, CountAdapter, FallbackOnNull, Field, FieldReader, FieldWriter, ListAdapter,
    Resource, StringAdapter,
};
use crate::shared::error::FieldError;
use crate::shared::profile::User;

/// Outcome of an invitation batch
#[derive(Debug, Clone, PartialEq)]
pub struct InvitationStats {
    /// Number of addresses submitted
    total_addresses: u32,
    invitations_sent: u32,
    /// Addresses that had been invited before
    already_invited: Vec<String>,
    /// Addresses belonging to existing members
    already_member: Vec<User>,
    invalid_addresses: Vec<String>,
}

impl InvitationStats {
    pub fn new(
        total_addresses: u32,
        invitations_sent: u32,
        already_invited: Vec<String>,
        already_member: Vec<User>,
        invalid_addresses: Vec<String>,
    ) -> Self {
        Self {
            total_addresses,
            invitations_sent,
            already_invited,
            already_member,
            invalid_addresses,
        }
    }

    pub fn total_addresses(&self) -> u32 {
        self.total_addresses
    }

    pub fn invitations_sent(&self) -> u32 {
        self.invitations_sent
    }

    pub fn already_invited(&self) -> &[String] {
        &self.already_invited
    }

    pub fn already_member(&self) -> &[User] {
        &self.already_member
    }

    pub fn invalid_addresses(&self) -> &[String] {
        &self.invalid_addresses
    }
}

impl Resource for InvitationStats {
    const NAME: &'static str = "InvitationStats";
    const FIELDS: &'static [Field] = &[
        Field::new("total_addresses", "total_addresses"),
        Field::new("invitations_sent", "invitations_sent"),
        Field::new("already_invited", "already_invited"),
        Field::new("already_member", "already_member"),
        Field::new("invalid_addresses", "invalid_addresses"),
    ];

    fn read(reader: &FieldReader<'_>) -> Result<Self, FieldError> {
        let count = FallbackOnNull(CountAdapter);
        let emails = FallbackOnNull(ListAdapter(StringAdapter));
        let members = FallbackOnNull(ListAdapter(reader.adapters().resource::<User>()));
        Ok(Self {
            total_addresses: reader.field("total_addresses", count)?,
            invitations_sent: reader.field("invitations_sent", count)?,
            already_invited: reader.field("already_invited", emails)?,
            already_member: reader.field("already_member", members)?,
            invalid_addresses: reader.field("invalid_addresses", emails)?,
        })
    }

    fn write(&self, writer: &mut FieldWriter<'_>) {
        let count = FallbackOnNull(CountAdapter);
        let emails = FallbackOnNull(ListAdapter(StringAdapter));
        let members = FallbackOnNull(ListAdapter(writer.adapters().resource::<User>()));
        writer.field("total_addresses", count, &self.total_addresses);
        writer.field("invitations_sent", count, &self.invitations_sent);
        writer.field("already_invited", emails, &self.already_invited);
        writer.field("already_member", members, &self.already_member);
        writer.field("invalid_addresses", emails, &self.invalid_addresses);
    }
}

resource_serde!(InvitationStats);
