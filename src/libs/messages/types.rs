#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskDeleteNoRows(i64),
    TaskLookupFailed(i64, String), // id, error
    TaskSaveFailed(usize, String), // index, error

    // === USER MESSAGES ===
    UserCreated(i64),
    UserUpdated(i64),
    UserDeleted(i64),
    UserLookupFailed(i64, String), // id, error
    UserSaveRolledBack(String),    // error
    UserTaskAdded(usize),          // task count

    // === CAPACITY MESSAGES ===
    CapacityWarning {
        email: String,
        count: usize,
    },
    CapacityExceeded(usize), // limit

    // === NOTIFICATION MESSAGES ===
    NotificationSent {
        to: String,
        subject: String,
        body: String,
    },

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigFileNotFound,

    // === DATABASE MESSAGES ===
    DatabaseOpened(String), // path
    DatabaseCleared,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseUpToDate,
}
