use chrono::{TimeZone, Utc};
use tasklet_core::filter::{Filter, TaskCounts, visible_tasks};
use tasklet_core::snapshot::{SNAPSHOT_ACTION, Snapshot, UserProfile};
use tasklet_core::store::{StoreError, TaskStore};
use tasklet_core::task::Task;

fn seeded_store(texts: &[&str]) -> TaskStore {
    let mut store = TaskStore::default();
    for (offset, text) in texts.iter().enumerate() {
        let now = Utc
            .timestamp_millis_opt(1_700_000_000_000 + offset as i64 * 1_000)
            .single()
            .expect("valid timestamp");
        store.add_task(text, now).expect("seed task");
    }
    store
}

#[test]
fn add_prepends_a_fresh_active_task() {
    let mut store = seeded_store(&["first", "second"]);
    let now = Utc::now();

    let task = store.add_task("  buy milk  ", now).expect("add task");
    assert_eq!(task.text, "buy milk");
    assert!(!task.completed);

    assert_eq!(store.tasks().len(), 3);
    assert_eq!(store.tasks()[0].text, "buy milk");
    assert_eq!(store.tasks()[1].text, "second");
}

#[test]
fn add_rejects_blank_text_without_touching_state() {
    let mut store = seeded_store(&["only"]);
    let before = store.tasks().to_vec();

    assert_eq!(store.add_task("", Utc::now()), Err(StoreError::EmptyText));
    assert_eq!(store.add_task("   \t ", Utc::now()), Err(StoreError::EmptyText));
    assert_eq!(store.tasks(), &before[..]);
}

#[test]
fn ids_stay_unique_within_one_millisecond() {
    let mut store = TaskStore::default();
    let now = Utc
        .timestamp_millis_opt(1_700_000_000_000)
        .single()
        .expect("valid timestamp");

    store.add_task("a", now).expect("add a");
    store.add_task("b", now).expect("add b");
    store.add_task("c", now).expect("add c");

    let mut ids: Vec<i64> = store.tasks().iter().map(|task| task.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn toggle_is_involutive_and_silent_on_missing_ids() {
    let mut store = seeded_store(&["flip me"]);
    let id = store.tasks()[0].id;

    assert_eq!(store.toggle_task(id), Some(true));
    assert_eq!(store.toggle_task(id), Some(false));
    assert!(!store.tasks()[0].completed);

    assert_eq!(store.toggle_task(id + 999), None);
    assert_eq!(store.tasks().len(), 1);
}

#[test]
fn delete_only_applies_on_explicit_confirmation() {
    let mut store = seeded_store(&["a", "b", "c"]);
    let target = store.tasks()[1].id;

    // Cancelled dialog: the apply phase never runs.
    assert_eq!(store.tasks().len(), 3);
    assert!(store.tasks().iter().any(|task| task.id == target));

    // Confirmed dialog: exactly the confirmed id goes away.
    let removed = store.delete_task(target).expect("delete target");
    assert_eq!(removed.id, target);
    assert_eq!(store.tasks().len(), 2);
    assert!(store.tasks().iter().all(|task| task.id != target));

    // Deleting again is a stale reference, not an error.
    assert_eq!(store.delete_task(target), None);
}

#[test]
fn clear_completed_removes_exactly_the_completed_subset() {
    let mut store = seeded_store(&["keep", "done one", "done two"]);
    let done_one = store.tasks()[1].id;
    let done_two = store.tasks()[2].id;
    store.toggle_task(done_one).expect("toggle");
    store.toggle_task(done_two).expect("toggle");

    assert_eq!(store.completed_count(), 2);
    assert_eq!(store.clear_completed(), 2);
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].text, "keep");

    // Nothing completed left: the informational path, no mutation.
    assert_eq!(store.completed_count(), 0);
    assert_eq!(store.clear_completed(), 0);
    assert_eq!(store.tasks().len(), 1);
}

#[test]
fn edit_flow_seeds_rejects_blank_and_rewrites_in_place() {
    let mut store = seeded_store(&["original text"]);
    let id = store.tasks()[0].id;

    let seeded = store.begin_edit(id).expect("begin edit");
    assert_eq!(seeded.text, "original text");
    assert_eq!(store.editing(), Some(id));

    // Blank commit: rejected, dialog target stays open.
    assert_eq!(store.commit_edit("  "), Err(StoreError::EmptyText));
    assert_eq!(store.editing(), Some(id));
    assert_eq!(store.tasks()[0].text, "original text");

    assert_eq!(store.commit_edit(" rewritten "), Ok(Some(id)));
    assert_eq!(store.editing(), None);
    assert_eq!(store.tasks()[0].text, "rewritten");
    assert_eq!(store.tasks()[0].id, id);
}

#[test]
fn stale_edit_target_commits_as_a_noop() {
    let mut store = seeded_store(&["doomed", "survivor"]);
    let doomed = store.tasks()[0].id;

    store.begin_edit(doomed).expect("begin edit");
    store.delete_task(doomed).expect("delete under the dialog");

    assert_eq!(store.commit_edit("anything"), Ok(None));
    assert_eq!(store.editing(), None);
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].text, "survivor");
}

#[test]
fn filtering_is_a_pure_ordered_projection() {
    let mut store = seeded_store(&["one", "two", "three", "four"]);
    // Newest-first: tasks are ["four", "three", "two", "one"].
    let three = store.tasks()[1].id;
    let one = store.tasks()[3].id;
    store.toggle_task(three).expect("toggle");
    store.toggle_task(one).expect("toggle");

    let active = visible_tasks(store.tasks(), Filter::Active);
    let texts: Vec<&str> = active.iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, ["four", "two"]);

    let completed = visible_tasks(store.tasks(), Filter::Completed);
    let texts: Vec<&str> = completed.iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, ["three", "one"]);

    assert_eq!(visible_tasks(store.tasks(), Filter::All).len(), 4);

    let counts = TaskCounts::of(store.tasks());
    assert_eq!(counts.total, 4);
    assert_eq!(counts.active + counts.completed, counts.total);
    assert_eq!(counts.active, 2);
    assert_eq!(counts.completed, 2);

    store.set_filter(Filter::Active);
    assert_eq!(store.visible().len(), 2);
}

#[test]
fn persisted_record_round_trips_identically() {
    let mut store = seeded_store(&["plain", "markup <script>alert(1)</script>", "done"]);
    let done = store.tasks()[0].id;
    store.toggle_task(done).expect("toggle");

    let json = serde_json::to_string(store.tasks()).expect("serialize tasks");
    let reloaded: Vec<Task> = serde_json::from_str(&json).expect("reload tasks");

    assert_eq!(reloaded, store.tasks());

    // User text is stored verbatim; markup never gains meaning on the
    // way through the record.
    assert_eq!(reloaded[1].text, "markup <script>alert(1)</script>");
    assert!(json.contains("createdAt"));
}

#[test]
fn snapshot_carries_the_full_collection_and_profile() {
    let store = seeded_store(&["a", "b"]);
    let now = Utc::now();
    let user = UserProfile {
        id: Some(42),
        first_name: "Ada".to_string(),
        ..UserProfile::default()
    };

    let snapshot = Snapshot::new(store.tasks().to_vec(), now, Some(user.clone()));
    assert_eq!(snapshot.action, SNAPSHOT_ACTION);
    assert_eq!(snapshot.tasks.len(), 2);

    let json = serde_json::to_string(&snapshot).expect("serialize snapshot");
    let reloaded: Snapshot = serde_json::from_str(&json).expect("reload snapshot");
    assert_eq!(reloaded, snapshot);
    assert_eq!(reloaded.user, Some(user));
}

#[test]
fn filter_keys_round_trip_for_the_tab_bar() {
    for filter in Filter::all() {
        assert_eq!(Filter::from_key(filter.as_key()), Some(filter));
    }
    assert_eq!(Filter::from_key("bogus"), None);
    assert_eq!(UserProfile::default().initial(), None);
}
