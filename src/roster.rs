use crate::constants::{MAX_MEMBERS, MIN_MEMBERS};

/// External form field identifiers for one extra member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemberFieldIds {
    pub name: &'static str,
    pub email: &'static str,
    pub student_id: &'static str,
    pub phone: &'static str,
}

/// Field identifiers for the extra member slots, in slot order.
pub const MEMBER_SLOTS: [MemberFieldIds; MAX_MEMBERS - 1] = [
    MemberFieldIds {
        name: "entry.1343391351",
        email: "entry.139198678",
        student_id: "entry.688846544",
        phone: "entry.911421852",
    },
    MemberFieldIds {
        name: "entry.37143100",
        email: "entry.108368031",
        student_id: "entry.1810013610",
        phone: "entry.149790021",
    },
    MemberFieldIds {
        name: "entry.1851371409",
        email: "entry.71080221",
        student_id: "entry.1749944194",
        phone: "entry.2041292449",
    },
];

// Team and leader fields
pub const TEAM_NAME_FIELD: &str = "entry.1928681021";
pub const CATEGORY_FIELD: &str = "entry.2126890954";
pub const LEADER_FIELDS: MemberFieldIds = MemberFieldIds {
    name: "entry.1549534817",
    email: "entry.1663784631",
    student_id: "entry.1067551578",
    phone: "entry.890610311",
};
pub const TERMS_FIELD: &str = "entry.933861959";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("You must have at least {min} members (including the Team Leader) to register.")]
    TooFewMembers { min: usize, have: usize },
}

/// A member card that was just added.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddedMember {
    pub slot: usize,
    /// "Member N" number shown on the card; the leader is member 1.
    pub label: usize,
    pub fields: MemberFieldIds,
}

/// Team composition: the leader plus extra members occupying field slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    // Occupied slots in display order.
    slots: Vec<usize>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leader included.
    #[inline]
    pub fn total(&self) -> usize {
        1 + self.slots.len()
    }

    #[inline]
    pub fn can_add(&self) -> bool {
        self.total() < MAX_MEMBERS
    }

    /// Claim the lowest free slot. `None` when the team is full.
    pub fn add(&mut self) -> Option<AddedMember> {
        if !self.can_add() {
            return None;
        }
        let slot = (0..MEMBER_SLOTS.len()).find(|s| !self.slots.contains(s))?;
        self.slots.push(slot);
        Some(AddedMember {
            slot,
            label: self.total(),
            fields: MEMBER_SLOTS[slot],
        })
    }

    /// Free `slot`. Returns false if it was not occupied.
    pub fn remove(&mut self, slot: usize) -> bool {
        match self.slots.iter().position(|s| *s == slot) {
            Some(i) => {
                self.slots.remove(i);
                true
            }
            None => false,
        }
    }

    /// `(slot, label)` for each extra member in display order.
    pub fn labels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.slots.iter().enumerate().map(|(i, s)| (*s, i + 2))
    }

    pub fn validate_for_submit(&self) -> Result<(), RosterError> {
        if self.total() < MIN_MEMBERS {
            return Err(RosterError::TooFewMembers {
                min: MIN_MEMBERS,
                have: self.total(),
            });
        }
        Ok(())
    }
}

pub const SUBMITTING_LABEL: &str = "Submitting...";

/// Submit button lifecycle around the hidden-frame post.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    /// Waiting for the frame to load; keeps the button's original label.
    Pending { label: String },
}

impl SubmitState {
    /// Enter the pending state, remembering `label`. Returns the label to show.
    pub fn begin(&mut self, label: String) -> &'static str {
        *self = Self::Pending { label };
        SUBMITTING_LABEL
    }

    /// The post could not be started. Returns the label to restore.
    pub fn fail(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Pending { label } => Some(label),
            Self::Idle => None,
        }
    }

    /// The frame loaded. True only if a submission was pending.
    pub fn complete(&mut self) -> bool {
        matches!(std::mem::take(self), Self::Pending { .. })
    }
}

/// Values used by the developer fill shortcut.
#[derive(Clone, Copy, Debug)]
pub struct SampleMember {
    pub name: &'static str,
    pub email: &'static str,
    pub student_id: &'static str,
    pub phone: &'static str,
}

pub const SAMPLE_TEAM_NAME: &str = "Test Team Alpha";
pub const SAMPLE_CATEGORY: &str = "University Category (Undergraduate & Graduate)";
pub const SAMPLE_LEADER: SampleMember = SampleMember {
    name: "John Doe (Leader)",
    email: "leader@example.com",
    student_id: "IT20001234",
    phone: "0771234567",
};
pub const SAMPLE_MEMBERS: [SampleMember; MAX_MEMBERS - 1] = [
    SampleMember {
        name: "Jane Smith",
        email: "jane@example.com",
        student_id: "IT20005678",
        phone: "0711234567",
    },
    SampleMember {
        name: "Mike Ross",
        email: "mike@example.com",
        student_id: "IT20009012",
        phone: "0721234567",
    },
    SampleMember {
        name: "Rachel Zane",
        email: "rachel@example.com",
        student_id: "IT20003456",
        phone: "0751234567",
    },
];

/// Shift+Alt+D fills the form with sample data.
#[inline]
pub fn is_fill_shortcut(shift: bool, alt: bool, key: &str) -> bool {
    shift && alt && key.eq_ignore_ascii_case("d")
}
