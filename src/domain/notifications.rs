// src/domain/notifications.rs

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Agent,
    User,
}

impl Role {
    /// Path segment used in `/{slug}-dashboard`.
    pub fn slug(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Agent => "agent",
            Role::User => "user",
        }
    }

    pub fn dashboard_path(self) -> String {
        format!("/{}-dashboard", self.slug())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "agent" => Ok(Role::Agent),
            "user" => Ok(Role::User),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Drives the icon and tint of a notification row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Schedule,
    Report,
    Alert,
    Lead,
    Appointment,
    Message,
}

impl NotificationKind {
    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Schedule => "🕑",
            NotificationKind::Report => "📄",
            NotificationKind::Alert => "⚠",
            NotificationKind::Lead => "👤",
            NotificationKind::Appointment => "📅",
            NotificationKind::Message => "💬",
        }
    }

    pub fn tint_class(self) -> &'static str {
        match self {
            NotificationKind::Schedule => "tint-blue",
            NotificationKind::Report | NotificationKind::Lead | NotificationKind::Message => {
                "tint-green"
            }
            NotificationKind::Alert => "tint-amber",
            NotificationKind::Appointment => "tint-violet",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub title: &'static str,
    pub message: &'static str,
    pub time: &'static str,
    pub kind: NotificationKind,
}

const SYSTEM_UPDATE: Notification = Notification {
    id: 1,
    title: "System Update",
    message: "The system will undergo maintenance tonight at 12 AM.",
    time: "2 hours ago",
    kind: NotificationKind::Schedule,
};

/// Fixed notification list for a role: the shared system notice first,
/// then two role-specific entries.
pub fn notifications_for(role: Role) -> Vec<Notification> {
    let specific = match role {
        Role::Admin => [
            Notification {
                id: 2,
                title: "New Report Available",
                message: "The monthly sales report is now available for review.",
                time: "3 hours ago",
                kind: NotificationKind::Report,
            },
            Notification {
                id: 3,
                title: "Urgent: System Alert",
                message: "High server load detected. Please check the system status.",
                time: "1 day ago",
                kind: NotificationKind::Alert,
            },
        ],
        Role::Agent => [
            Notification {
                id: 2,
                title: "New Lead Assigned",
                message: "A new lead has been assigned to you. Check your dashboard.",
                time: "5 hours ago",
                kind: NotificationKind::Lead,
            },
            Notification {
                id: 3,
                title: "Appointment Reminder",
                message: "You have a property viewing scheduled tomorrow at 2 PM.",
                time: "Yesterday",
                kind: NotificationKind::Appointment,
            },
        ],
        Role::User => [
            Notification {
                id: 2,
                title: "Message from Agent",
                message: "Agent Smith sent you a message about your inquiry.",
                time: "4 hours ago",
                kind: NotificationKind::Message,
            },
            Notification {
                id: 3,
                title: "Price Drop Alert",
                message: "A property in your favorites list has a 5% price reduction.",
                time: "Yesterday",
                kind: NotificationKind::Alert,
            },
        ],
    };

    std::iter::once(SYSTEM_UPDATE).chain(specific).collect()
}
