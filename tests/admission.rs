#[cfg(test)]
mod tests {
    use todolist::libs::admission::{Admission, AdmissionPolicy, REMINDER_SUBJECT};
    use todolist::libs::error::TodoError;
    use todolist::libs::notifier::{LogNotifier, Notifier, NotifyError};
    use todolist::libs::task::Task;
    use todolist::libs::user::User;
    use test_context::{test_context, TestContext};

    struct FailingNotifier;

    impl Notifier for FailingNotifier {
        fn send(&self, address: &str, _subject: &str, _body: &str) -> Result<(), NotifyError> {
            Err(NotifyError::new(address, "mail server unreachable"))
        }
    }

    struct AdmissionTestContext {
        user: User,
        notifier: LogNotifier,
    }

    impl TestContext for AdmissionTestContext {
        fn setup() -> Self {
            AdmissionTestContext {
                user: User::new("Jane", "Doe", "jane@example.com", None),
                notifier: LogNotifier::new(),
            }
        }
    }

    impl AdmissionTestContext {
        fn fill(&mut self, count: usize) {
            for i in 0..count {
                self.user.add_task(Task::new(&format!("Task {}", i + 1)), &self.notifier).unwrap();
            }
        }
    }

    #[test_context(AdmissionTestContext)]
    #[test]
    fn test_first_eight_tasks_are_silent(ctx: &mut AdmissionTestContext) {
        ctx.fill(8);

        assert_eq!(ctx.user.task_count(), 8);
        assert_eq!(ctx.notifier.count(), 0);
    }

    #[test_context(AdmissionTestContext)]
    #[test]
    fn test_ninth_and_tenth_tasks_notify(ctx: &mut AdmissionTestContext) {
        ctx.fill(8);

        ctx.user.add_task(Task::new("Task 9"), &ctx.notifier).unwrap();
        assert_eq!(ctx.user.task_count(), 9);
        assert_eq!(ctx.notifier.count(), 1);

        let reminder = ctx.notifier.last().unwrap();
        assert_eq!(reminder.address, "jane@example.com");
        assert_eq!(reminder.subject, REMINDER_SUBJECT);
        assert_eq!(reminder.subject, "wake up");
        assert_eq!(reminder.body, "You have 2 tasks left");

        ctx.user.add_task(Task::new("Task 10"), &ctx.notifier).unwrap();
        assert_eq!(ctx.user.task_count(), 10);
        assert_eq!(ctx.notifier.count(), 2);
    }

    #[test_context(AdmissionTestContext)]
    #[test]
    fn test_eleventh_task_is_rejected(ctx: &mut AdmissionTestContext) {
        ctx.fill(10);

        let result = ctx.user.add_task(Task::new("Task 11"), &ctx.notifier);

        assert!(matches!(result, Err(TodoError::CapacityExceeded { limit: 10 })));
        assert_eq!(ctx.user.task_count(), 10);
        // The reminder still goes out before the rejection
        assert_eq!(ctx.notifier.count(), 3);
        assert!(ctx.user.get_tasks().iter().all(|t| t.name != "Task 11"));
    }

    #[test_context(AdmissionTestContext)]
    #[test]
    fn test_failed_reminder_blocks_task(ctx: &mut AdmissionTestContext) {
        ctx.fill(8);

        let result = ctx.user.add_task(Task::new("Task 9"), &FailingNotifier);

        match result {
            Err(TodoError::Notification(e)) => {
                assert_eq!(e.address, "jane@example.com");
                assert_eq!(e.reason, "mail server unreachable");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(ctx.user.task_count(), 8);
    }

    #[test_context(AdmissionTestContext)]
    #[test]
    fn test_failing_notifier_unused_below_soft_limit(ctx: &mut AdmissionTestContext) {
        ctx.user.add_task(Task::new("Task 1"), &FailingNotifier).unwrap();

        assert_eq!(ctx.user.task_count(), 1);
    }

    #[test_context(AdmissionTestContext)]
    #[test]
    fn test_custom_policy(ctx: &mut AdmissionTestContext) {
        let policy = AdmissionPolicy::new(1, 3);

        ctx.user.add_task_with_policy(Task::new("Task 1"), &ctx.notifier, &policy).unwrap();
        assert_eq!(ctx.notifier.count(), 0);

        ctx.user.add_task_with_policy(Task::new("Task 2"), &ctx.notifier, &policy).unwrap();
        ctx.user.add_task_with_policy(Task::new("Task 3"), &ctx.notifier, &policy).unwrap();
        assert_eq!(ctx.notifier.count(), 2);
        assert_eq!(ctx.notifier.last().unwrap().body, "You have 2 tasks left");

        let result = ctx.user.add_task_with_policy(Task::new("Task 4"), &ctx.notifier, &policy);
        assert!(matches!(result, Err(TodoError::CapacityExceeded { limit: 3 })));
        assert_eq!(ctx.user.task_count(), 3);
    }

    #[test]
    fn test_default_policy_decisions() {
        let policy = AdmissionPolicy::default();
        assert_eq!(policy, AdmissionPolicy::new(8, 10));

        assert_eq!(policy.decide(0), Admission::Admit);
        assert_eq!(policy.decide(7), Admission::Admit);
        assert_eq!(policy.decide(8), Admission::AdmitAndNotify);
        assert_eq!(policy.decide(9), Admission::AdmitAndNotify);
        assert_eq!(policy.decide(10), Admission::NotifyAndReject);
        assert_eq!(policy.decide(25), Admission::NotifyAndReject);
    }

    #[test]
    fn test_inverted_policy_rejects_silently() {
        let policy = AdmissionPolicy::new(5, 2);

        assert_eq!(policy.decide(2), Admission::Reject);
        assert!(!Admission::Reject.notifies());
        assert!(!Admission::Reject.admits());
        assert_eq!(policy.reminder_body(), "You have 0 tasks left");
    }
}
