use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use ironlog_domain as domain;
use log::debug;

const MAX_NOTIFICATIONS: usize = 5;

/// Queue of notifications waiting to be shown as toasts.
///
/// Clones share the same queue. Only the newest notifications are kept.
#[derive(Debug, Default, Clone)]
pub struct Notifications {
    queue: Rc<RefCell<VecDeque<domain::Notification>>>,
}

impl Notifications {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// Remove the oldest notification.
    pub fn pop(&self) -> Option<domain::Notification> {
        self.queue.borrow_mut().pop_front()
    }

    /// Remove all notifications, oldest first.
    pub fn drain(&self) -> Vec<domain::Notification> {
        self.queue.borrow_mut().drain(..).collect()
    }
}

impl domain::Notifier for Notifications {
    fn notify(&self, notification: domain::Notification) {
        debug!("notification: {}", notification.title);
        let mut queue = self.queue.borrow_mut();
        queue.push_back(notification);
        while queue.len() > MAX_NOTIFICATIONS {
            queue.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use ironlog_domain::Notifier;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_notifications() {
        let notifications = Notifications::new();
        let shared = notifications.clone();
        assert!(notifications.is_empty());

        shared.notify(domain::Notification::info("Workout Started", "Push"));
        shared.notify(domain::Notification::error("Save Failed", "Storage unavailable"));

        assert_eq!(notifications.len(), 2);
        assert_eq!(
            notifications.pop(),
            Some(domain::Notification::info("Workout Started", "Push"))
        );
        assert_eq!(
            notifications.drain(),
            vec![domain::Notification::error(
                "Save Failed",
                "Storage unavailable"
            )]
        );
        assert!(shared.is_empty());
        assert_eq!(notifications.pop(), None);
    }

    #[test]
    fn test_notifications_keep_newest() {
        let notifications = Notifications::new();
        for i in 0..7 {
            notifications.notify(domain::Notification::info(i.to_string(), ""));
        }
        assert_eq!(
            notifications
                .drain()
                .into_iter()
                .map(|n| n.title)
                .collect::<Vec<_>>(),
            vec!["2", "3", "4", "5", "6"]
        );
    }
}
