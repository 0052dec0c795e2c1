#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use headcount::libs::error::StoreError;
    use headcount::libs::group::GroupRecord;
    use headcount::libs::store::GroupStore;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Scratch directory for the daily log files of one test.
    struct StoreTestContext {
        _temp_dir: TempDir,
        dir: PathBuf,
        store: GroupStore,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let dir = temp_dir.path().to_path_buf();
            let store = GroupStore::new(dir.join("test_groups.json"));
            StoreTestContext {
                _temp_dir: temp_dir,
                dir,
                store,
            }
        }
    }

    fn sample_groups() -> Vec<GroupRecord> {
        vec![
            GroupRecord::new(1, 3, "18:00:00"),
            GroupRecord::new(2, 2, "18:10:00"),
            GroupRecord::new(3, 5, "19:30:00"),
            GroupRecord::new(4, 1, "20:45:00"),
        ]
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_load_existing_groups(ctx: &mut StoreTestContext) {
        let json = serde_json::to_string_pretty(&sample_groups()).unwrap();
        fs::write(ctx.store.path(), json).unwrap();

        assert!(ctx.store.exists());
        assert_eq!(ctx.store.load(), sample_groups());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_load_missing_file_is_empty(ctx: &mut StoreTestContext) {
        assert!(!ctx.store.exists());
        assert!(ctx.store.load().is_empty());
        assert!(ctx.store.try_load().unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_load_corrupt_file_is_empty(ctx: &mut StoreTestContext) {
        fs::write(ctx.store.path(), "not json").unwrap();

        assert!(ctx.store.load().is_empty());
        assert!(matches!(ctx.store.try_load(), Err(StoreError::Parse { .. })));
        // The corrupt file is left alone until the next save.
        assert_eq!(fs::read_to_string(ctx.store.path()).unwrap(), "not json");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_load_wrong_shape_is_empty(ctx: &mut StoreTestContext) {
        fs::write(ctx.store.path(), r#"{"id": 1, "people": 3, "timestamp": "18:00:00"}"#).unwrap();
        assert!(ctx.store.load().is_empty());

        fs::write(ctx.store.path(), r#"[{"id": 1, "people": "three", "timestamp": "18:00:00"}]"#).unwrap();
        assert!(ctx.store.load().is_empty());

        fs::write(ctx.store.path(), r#"[{"id": 1, "people": -2, "timestamp": "18:00:00"}]"#).unwrap();
        assert!(ctx.store.load().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_load_rejects_logs_breaking_invariants(ctx: &mut StoreTestContext) {
        let broken = [
            r#"[{"id": 1, "people": 0, "timestamp": "18:00:00"}, {"id": 1, "people": 2, "timestamp": "bogus"}]"#,
            r#"[{"id": 1, "people": 0, "timestamp": "18:00:00"}]"#,
            r#"[{"id": 1, "people": 3, "timestamp": "18:00:00"}, {"id": 1, "people": 2, "timestamp": "18:05:00"}]"#,
            r#"[{"id": 2, "people": 3, "timestamp": "18:00:00"}, {"id": 1, "people": 2, "timestamp": "18:05:00"}]"#,
            r#"[{"id": 1, "people": 3, "timestamp": "bogus"}]"#,
            r#"[{"id": 1, "people": 3, "timestamp": "25:00:00"}]"#,
        ];

        for content in broken {
            fs::write(ctx.store.path(), content).unwrap();
            assert!(ctx.store.load().is_empty(), "{content}");
            assert!(matches!(ctx.store.try_load(), Err(StoreError::Invalid { .. })), "{content}");
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_invalid_log_error_names_the_group(ctx: &mut StoreTestContext) {
        fs::write(
            ctx.store.path(),
            r#"[{"id": 1, "people": 3, "timestamp": "18:00:00"}, {"id": 2, "people": 0, "timestamp": "18:05:00"}]"#,
        )
        .unwrap();

        let message = ctx.store.try_load().unwrap_err().to_string();
        assert!(message.contains("test_groups.json"));
        assert!(message.contains("group 2 has no people"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_load_directory_path_is_empty(ctx: &mut StoreTestContext) {
        let store = GroupStore::new(&ctx.dir);
        assert!(!store.exists());
        assert!(store.load().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_and_load_round_trip(ctx: &mut StoreTestContext) {
        assert!(ctx.store.save(&sample_groups()));
        assert_eq!(ctx.store.load(), sample_groups());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_writes_pretty_json_in_field_order(ctx: &mut StoreTestContext) {
        let groups = vec![GroupRecord::new(1, 3, "18:00:00")];
        assert!(ctx.store.save(&groups));

        let content = fs::read_to_string(ctx.store.path()).unwrap();
        let expected = "[\n  {\n    \"id\": 1,\n    \"people\": 3,\n    \"timestamp\": \"18:00:00\"\n  }\n]";
        assert_eq!(content, expected);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_replaces_existing_file(ctx: &mut StoreTestContext) {
        fs::write(ctx.store.path(), "not json").unwrap();

        assert!(ctx.store.save(&sample_groups()[..2]));
        assert_eq!(ctx.store.load(), sample_groups()[..2].to_vec());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_empty_log(ctx: &mut StoreTestContext) {
        assert!(ctx.store.save(&[]));
        assert_eq!(fs::read_to_string(ctx.store.path()).unwrap(), "[]");
        assert!(ctx.store.load().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_to_invalid_path_returns_false(ctx: &mut StoreTestContext) {
        let store = GroupStore::new(ctx.dir.join("missing").join("file.json"));

        assert!(!store.save(&sample_groups()));
        assert!(matches!(store.try_save(&sample_groups()), Err(StoreError::Write { .. })));
        assert!(!store.exists());
    }

    #[test]
    fn test_append_assigns_next_id() {
        let existing = sample_groups()[..2].to_vec();
        let result = GroupStore::append(&existing, 4);

        assert_eq!(result.len(), 3);
        assert_eq!(result[2].id, 3);
        assert_eq!(result[2].people, 4);
        assert_eq!(result[2].timestamp.len(), 8);
        assert_eq!(&result[..2], &existing[..]);
    }

    #[test]
    fn test_append_does_not_mutate_input() {
        let original = sample_groups();
        let snapshot = original.clone();

        let result = GroupStore::append(&original, 5);

        assert_eq!(original, snapshot);
        assert_eq!(result.len(), original.len() + 1);
    }

    #[test]
    fn test_append_to_empty_log() {
        let first = GroupStore::append(&[], 3);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].id, 1);
        assert_eq!(first[0].people, 3);

        let second = GroupStore::append(&first, 2);
        assert_eq!(first.len(), 1);
        assert_eq!(second[0].id, 1);
        assert_eq!(second[1].id, 2);
    }

    #[test]
    fn test_append_at_uses_given_timestamp() {
        let result = GroupStore::append_at(&[], 6, "21:15:00");
        assert_eq!(result, vec![GroupRecord::new(1, 6, "21:15:00")]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_for_date_uses_daily_filename(ctx: &mut StoreTestContext) {
        let date = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        let store = GroupStore::for_date(&ctx.dir, &date);

        assert_eq!(store.path(), ctx.dir.join("groups_log_2025_11_01.json"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_today_store_lives_in_dir(ctx: &mut StoreTestContext) {
        let store = GroupStore::today(&ctx.dir);
        let file_name = store.path().file_name().unwrap().to_string_lossy().to_string();

        assert_eq!(store.path().parent().unwrap(), ctx.dir.as_path());
        assert!(file_name.starts_with("groups_log_"));
        assert!(file_name.ends_with(".json"));
    }
}
