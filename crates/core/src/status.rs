//! Status values for proposals and contact messages.
//!
//! Status changes are unrestricted: an admin may move a row from any status
//! to any other. Only the set of values is closed.

use serde::{Deserialize, Serialize};

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every status value, in display order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// The value stored in the `status` column.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $val ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $val => Ok($name::$variant), )+
                    other => Err(format!(
                        "Invalid status '{other}'. Must be one of: {}",
                        [$( $val ),+].join(", ")
                    )),
                }
            }
        }
    };
}

define_status_enum! {
    /// Review status of a proposal request.
    ProposalStatus {
        Pending = "pending",
        Reviewed = "reviewed",
        Approved = "approved",
        Declined = "declined",
    }
}

define_status_enum! {
    /// Moderation status of a contact message.
    MessageStatus {
        New = "new",
        Read = "read",
        Replied = "replied",
        Archived = "archived",
    }
}

impl ProposalStatus {
    /// Status forced onto every publicly submitted proposal.
    pub const INITIAL: ProposalStatus = ProposalStatus::Pending;
}

impl MessageStatus {
    /// Status forced onto every publicly submitted message.
    pub const INITIAL: MessageStatus = MessageStatus::New;

    /// Status to apply when an admin opens the message, if any.
    ///
    /// Only a `new` message moves to `read`; opening it again afterwards
    /// leaves the status alone.
    pub fn on_view(self) -> Option<MessageStatus> {
        match self {
            MessageStatus::New => Some(MessageStatus::Read),
            _ => None,
        }
    }
}

/// Filter used by admin list views (`?status=`). `None` means "all".
pub fn parse_status_filter<S>(raw: Option<&str>) -> Result<Option<S>, String>
where
    S: std::str::FromStr<Err = String>,
{
    match raw {
        None | Some("") | Some("all") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

/// Text shown when an admin list is empty: `No proposals yet` without a
/// filter, `No pending proposals` with one.
pub fn empty_list_placeholder<S: std::fmt::Display>(noun: &str, filter: Option<S>) -> String {
    match filter {
        Some(status) => format!("No {status} {noun}"),
        None => format!("No {noun} yet"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proposal_status_round_trips_through_strings() {
        for status in ProposalStatus::ALL {
            assert_eq!(status.as_str().parse::<ProposalStatus>().unwrap(), *status);
        }
        assert_eq!(ProposalStatus::ALL.len(), 4);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "closed".parse::<MessageStatus>().unwrap_err();
        assert!(err.contains("Invalid status 'closed'"));
        assert!(err.contains("new, read, replied, archived"));
    }

    #[test]
    fn only_new_messages_transition_on_view() {
        assert_eq!(MessageStatus::New.on_view(), Some(MessageStatus::Read));
        assert_eq!(MessageStatus::Read.on_view(), None);
        assert_eq!(MessageStatus::Replied.on_view(), None);
        assert_eq!(MessageStatus::Archived.on_view(), None);
    }

    #[test]
    fn initial_statuses() {
        assert_eq!(ProposalStatus::INITIAL.as_str(), "pending");
        assert_eq!(MessageStatus::INITIAL.as_str(), "new");
    }

    #[test]
    fn status_filter_treats_all_as_none() {
        assert_eq!(parse_status_filter::<ProposalStatus>(None).unwrap(), None);
        assert_eq!(parse_status_filter::<ProposalStatus>(Some("all")).unwrap(), None);
        assert_eq!(
            parse_status_filter::<ProposalStatus>(Some("approved")).unwrap(),
            Some(ProposalStatus::Approved)
        );
        assert!(parse_status_filter::<ProposalStatus>(Some("bogus")).is_err());
    }

    #[test]
    fn placeholder_names_the_active_filter() {
        assert_eq!(
            empty_list_placeholder::<ProposalStatus>("proposals", None),
            "No proposals yet"
        );
        assert_eq!(
            empty_list_placeholder("proposals", Some(ProposalStatus::Pending)),
            "No pending proposals"
        );
        assert_eq!(
            empty_list_placeholder("messages", Some(MessageStatus::Archived)),
            "No archived messages"
        );
    }

    #[test]
    fn statuses_serialize_lowercase() {
        assert_eq!(
            serde_json::to_value(ProposalStatus::Declined).unwrap(),
            "declined"
        );
        let parsed: MessageStatus = serde_json::from_value(serde_json::json!("replied")).unwrap();
        assert_eq!(parsed, MessageStatus::Replied);
    }
}
