#[cfg(test)]
mod tests {
    use todolist::db::db::Db;
    use todolist::libs::error::TodoError;
    use todolist::libs::notifier::LogNotifier;
    use todolist::libs::task::Task;
    use todolist::libs::user::User;
    use test_context::{test_context, TestContext};

    struct UserTestContext {
        db: Db,
        notifier: LogNotifier,
    }

    impl TestContext for UserTestContext {
        fn setup() -> Self {
            UserTestContext {
                db: Db::open_in_memory().unwrap(),
                notifier: LogNotifier::new(),
            }
        }
    }

    fn valid_user(firstname: &str) -> User {
        let mut user = User::new(firstname, "Doe", &format!("{}@example.com", firstname.to_lowercase()), None);
        user.parse_birthdate("1990-05-17").unwrap();
        user.password = "s3cret".to_string();
        user
    }

    fn user_with_tasks(ctx: &UserTestContext, names: &[&str]) -> User {
        let mut user = valid_user("Jane");
        for name in names {
            user.add_task(Task::new(name), &ctx.notifier).unwrap();
        }
        user
    }

    #[test]
    fn test_new_user() {
        let tasks = vec![Task::new("First"), Task::new("Second")];
        let user = User::new("Jane", "Doe", "jane@example.com", Some(tasks.clone()));

        assert_eq!(user.id, 0);
        assert!(!user.is_persisted());
        assert_eq!(user.firstname, "Jane");
        assert_eq!(user.lastname, "Doe");
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.get_tasks(), tasks.as_slice());

        let empty = User::new("Jane", "Doe", "jane@example.com", None);
        assert!(empty.get_tasks().is_empty());
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_save_and_get_user(ctx: &mut UserTestContext) {
        let mut user = user_with_tasks(ctx, &["Write report", "Call mom"]);
        user.save(&mut ctx.db).unwrap();

        assert!(user.id > 0);
        assert!(user.get_tasks().iter().all(|t| t.id > 0 && t.user_id == Some(user.id)));

        let fetched = ctx.db.users().get(user.id).unwrap().unwrap();
        assert_eq!(fetched.firstname, user.firstname);
        assert_eq!(fetched.lastname, user.lastname);
        assert_eq!(fetched.email, user.email);
        assert_eq!(fetched.birthdate, user.birthdate);
        assert_eq!(fetched.password, user.password);
        assert_eq!(fetched.task_count(), 2);
        assert_eq!(fetched, user);
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_get_missing_user(ctx: &mut UserTestContext) {
        assert!(ctx.db.users().get(1).unwrap().is_none());
        assert!(!ctx.db.users().exists(1));
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_save_assigns_sequential_ids(ctx: &mut UserTestContext) {
        for (i, name) in ["Ann", "Bob", "Cid"].iter().enumerate() {
            let mut user = valid_user(name);
            user.save(&mut ctx.db).unwrap();
            assert_eq!(user.id, i as i64 + 1);
        }

        let users = ctx.db.users().list_all().unwrap();
        let names: Vec<&str> = users.iter().map(|u| u.firstname.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bob", "Cid"]);
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_save_twice_keeps_id(ctx: &mut UserTestContext) {
        let mut user = user_with_tasks(ctx, &["Only task"]);
        user.save(&mut ctx.db).unwrap();
        let id = user.id;
        let task_id = user.get_task(0).unwrap().id;
        let first_updated_at = user.updated_at;

        user.save(&mut ctx.db).unwrap();

        assert_eq!(user.id, id);
        assert_eq!(user.get_task(0).unwrap().id, task_id);
        assert!(user.updated_at >= first_updated_at);
        assert_eq!(ctx.db.users().list_all().unwrap().len(), 1);
        assert_eq!(ctx.db.tasks().list_all().unwrap().len(), 1);
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_update_user(ctx: &mut UserTestContext) {
        let mut user = user_with_tasks(ctx, &["Only task"]);
        user.save(&mut ctx.db).unwrap();

        let mut fetched = ctx.db.users().get(user.id).unwrap().unwrap();
        fetched.firstname = format!("{}_updated", fetched.firstname);
        fetched.save(&mut ctx.db).unwrap();

        let updated = ctx.db.users().get(user.id).unwrap().unwrap();
        assert_eq!(updated.firstname, "Jane_updated");
        assert_eq!(updated.lastname, user.lastname);
        assert_eq!(updated.email, user.email);
        assert_eq!(updated.task_count(), 1);
        assert_eq!(updated.get_task(0).unwrap().name, "Only task");
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_delete_task_by_index(ctx: &mut UserTestContext) {
        let mut user = user_with_tasks(ctx, &["First", "Second", "Third"]);
        user.save(&mut ctx.db).unwrap();
        let removed_id = user.get_task(1).unwrap().id;

        let removed = user.delete_task(1, &ctx.db.tasks()).unwrap();

        assert_eq!(removed.name, "Second");
        let names: Vec<&str> = user.get_tasks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Third"]);
        assert!(!ctx.db.tasks().exists(removed_id));
        assert_eq!(ctx.db.tasks().list_by_user(user.id).unwrap().len(), 2);
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_delete_task_keeps_entry_on_store_failure(ctx: &mut UserTestContext) {
        let mut user = user_with_tasks(ctx, &["First", "Second"]);
        user.save(&mut ctx.db).unwrap();
        ctx.db.conn.execute("DROP TABLE tasks", []).unwrap();

        let result = user.delete_task(0, &ctx.db.tasks());

        assert!(matches!(result, Err(TodoError::Persistence(_))));
        assert_eq!(user.task_count(), 2);
        assert_eq!(user.get_task(0).unwrap().name, "First");
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_index_out_of_range(ctx: &mut UserTestContext) {
        let mut user = user_with_tasks(ctx, &["Only task"]);

        assert!(matches!(user.get_task(1), Err(TodoError::IndexOutOfRange { index: 1, len: 1 })));
        assert!(matches!(user.complete_task(5), Err(TodoError::IndexOutOfRange { index: 5, len: 1 })));
        assert!(matches!(user.delete_task(3, &ctx.db.tasks()), Err(TodoError::IndexOutOfRange { index: 3, len: 1 })));
        assert_eq!(user.task_count(), 1);
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_complete_task(ctx: &mut UserTestContext) {
        let mut user = user_with_tasks(ctx, &["First", "Second"]);

        user.complete_task(1).unwrap();

        assert!(!user.get_task(0).unwrap().completed);
        assert!(user.get_task(1).unwrap().completed);
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_save_rolls_back_on_task_failure(ctx: &mut UserTestContext) {
        ctx.db
            .conn
            .execute_batch(
                "CREATE TRIGGER reject_boom BEFORE INSERT ON tasks WHEN NEW.name = 'boom'
                 BEGIN SELECT RAISE(ABORT, 'boom is not allowed'); END;",
            )
            .unwrap();
        let mut user = user_with_tasks(ctx, &["fine", "boom", "also fine"]);
        let before = user.clone();

        let err = user.save(&mut ctx.db).unwrap_err();

        match err {
            TodoError::TaskSaveFailed(failures) => {
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].index, 1);
                assert!(failures[0].reason.contains("boom is not allowed"));
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(user, before);
        assert!(ctx.db.users().list_all().unwrap().is_empty());
        assert!(ctx.db.tasks().list_all().unwrap().is_empty());
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_delete_user_removes_tasks(ctx: &mut UserTestContext) {
        let mut user = user_with_tasks(ctx, &["First", "Second"]);
        user.save(&mut ctx.db).unwrap();
        let mut other = valid_user("Bob");
        other.add_task(Task::new("Bob's task"), &ctx.notifier).unwrap();
        other.save(&mut ctx.db).unwrap();

        user.delete(&mut ctx.db).unwrap();

        assert!(!ctx.db.users().exists(user.id));
        assert!(ctx.db.tasks().list_by_user(user.id).unwrap().is_empty());
        assert_eq!(ctx.db.tasks().list_all().unwrap().len(), 1);
        assert!(ctx.db.users().exists(other.id));
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_clear_database(ctx: &mut UserTestContext) {
        let mut user = user_with_tasks(ctx, &["First"]);
        user.save(&mut ctx.db).unwrap();

        ctx.db.clear().unwrap();

        assert!(ctx.db.users().list_all().unwrap().is_empty());
        assert!(ctx.db.tasks().list_all().unwrap().is_empty());
    }

    #[test]
    fn test_password_is_not_serialized() {
        let user = valid_user("Jane");
        let json = serde_json::to_string(&user).unwrap();

        assert!(json.contains("\"firstname\":\"Jane\""));
        assert!(!json.contains("s3cret"));
    }
}
