//! Diesel schema for profile persistence.

diesel::table! {
    /// User profiles keyed by user identifier.
    profiles (id) {
        /// Owning user identifier.
        id -> Uuid,
        /// Account email address.
        #[max_length = 320]
        email -> Varchar,
        /// Display name, possibly empty.
        #[max_length = 200]
        fullname -> Varchar,
        /// Optional avatar location.
        avatar_url -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
