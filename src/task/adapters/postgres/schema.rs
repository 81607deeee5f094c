//! Diesel schema for task persistence.

diesel::table! {
    /// Owner-scoped to-do tasks.
    tasks (id) {
        /// Task identifier, generated by the database.
        id -> Uuid,
        /// Owning user identifier.
        owner_id -> Uuid,
        /// Trimmed task title.
        #[max_length = 500]
        title -> Varchar,
        /// Lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Start timestamp.
        started_at -> Nullable<Timestamptz>,
        /// Completion timestamp.
        completed_at -> Nullable<Timestamptz>,
        /// Order index among the owner's tasks.
        position -> Int4,
    }
}
