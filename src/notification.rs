//! Parse notification / diagnostic system.
//!
//! Non-fatal issues encountered during a conversion (skipped entity types,
//! entities discarded over malformed numbers, unresolved block references,
//! an empty result) are collected as `Notification` items rather than being
//! silently dropped or causing hard errors.
//!
//! After a conversion the caller can inspect [`crate::Drawing::notifications`]
//! to see what was encountered.

use std::fmt;

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// An entity keyword the converter does not interpret was skipped.
    SkippedEntity,
    /// An entity was discarded because one of its numeric groups failed to
    /// parse.
    DiscardedEntity,
    /// An INSERT or DIMENSION referenced a block that was never defined.
    UnresolvedBlock,
    /// Non-fatal warning (e.g., empty drawing, failing close).
    Warning,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SkippedEntity => write!(f, "SkippedEntity"),
            Self::DiscardedEntity => write!(f, "DiscardedEntity"),
            Self::UnresolvedBlock => write!(f, "UnresolvedBlock"),
            Self::Warning => write!(f, "Warning"),
        }
    }
}

/// A single notification produced during a conversion.
#[derive(Debug, Clone)]
pub struct Notification {
    /// The category.
    pub notification_type: NotificationType,
    /// A human-readable description of the issue.
    pub message: String,
}

impl Notification {
    /// Create a new notification.
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.notification_type, self.message)
    }
}

/// Collects notifications during a conversion.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.items.push(Notification::new(notification_type, message));
    }

    /// Check if there are any notifications.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of notifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over all notifications.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Get all notifications of a specific type.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items
            .iter()
            .filter(|n| n.notification_type == nt)
            .collect()
    }

    /// Check whether any notification of the given type exists.
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    /// Consume the collection into a `Vec`.
    pub fn into_vec(self) -> Vec<Notification> {
        self.items
    }
}

impl IntoIterator for NotificationCollection {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_and_query() {
        let mut coll = NotificationCollection::new();
        assert!(coll.is_empty());

        coll.notify(NotificationType::SkippedEntity, "WIPEOUT skipped");
        coll.notify(NotificationType::UnresolvedBlock, "block 'A' not defined");

        assert_eq!(coll.len(), 2);
        assert!(coll.has_type(NotificationType::SkippedEntity));
        assert!(!coll.has_type(NotificationType::DiscardedEntity));
        assert_eq!(coll.of_type(NotificationType::UnresolvedBlock).len(), 1);
    }

    #[test]
    fn test_display() {
        let n = Notification::new(NotificationType::Warning, "no drawable entities");
        assert_eq!(n.to_string(), "[Warning] no drawable entities");
    }
}
