use std::sync::Arc;

use parking_lot::Mutex;

use tally::counter::CounterViewModel;

#[tokio::test(start_paused = true)]
async fn count_projection_ignores_message_only_changes() {
    let vm = CounterViewModel::new();

    let count_calls = Arc::new(Mutex::new(0u32));
    let message_calls = Arc::new(Mutex::new(0u32));
    let loading_calls = Arc::new(Mutex::new(0u32));

    let calls = Arc::clone(&count_calls);
    let _count_sub = vm.count().subscribe(move |_| *calls.lock() += 1);
    let calls = Arc::clone(&message_calls);
    let _message_sub = vm.message().subscribe(move |_| *calls.lock() += 1);
    let calls = Arc::clone(&loading_calls);
    let _loading_sub = vm.is_loading().subscribe(move |_| *calls.lock() += 1);

    // The rejection path replaces the state once, changing only the
    // message field.
    vm.set_count(-1).await;

    assert_eq!(*count_calls.lock(), 0);
    assert_eq!(*message_calls.lock(), 1);
    assert_eq!(*loading_calls.lock(), 0);
}

#[tokio::test(start_paused = true)]
async fn count_projection_skips_the_loading_phase() {
    let vm = CounterViewModel::new();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);
    let _sub = vm.count().subscribe(move |count| seen_clone.lock().push(*count));

    // Two replacements happen (loading, then result) but the count only
    // changes once.
    vm.increment().await;

    assert_eq!(*seen.lock(), vec![1]);
}

#[tokio::test(start_paused = true)]
async fn loading_projection_sees_true_then_false() {
    let vm = CounterViewModel::new();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);
    let _sub = vm
        .is_loading()
        .subscribe(move |loading| seen_clone.lock().push(*loading));

    vm.increment().await;

    assert_eq!(*seen.lock(), vec![true, false]);
}

#[tokio::test(start_paused = true)]
async fn message_projection_tracks_the_latest_message() {
    let vm = CounterViewModel::new();
    vm.set_count(42).await;

    assert_eq!(
        vm.message().get(),
        "42 - the answer to life, the universe, and everything!"
    );
    assert_eq!(vm.count().get(), 42);
    assert!(!vm.is_loading().get());
}

#[tokio::test(start_paused = true)]
async fn projection_clones_share_cache_and_observers() {
    let vm = CounterViewModel::new();
    let count = vm.count();
    let twin = count.clone();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);
    let _sub = twin.subscribe(move |count| seen_clone.lock().push(*count));

    vm.increment().await;

    assert_eq!(count.get(), 1);
    assert_eq!(twin.get(), 1);
    assert_eq!(*seen.lock(), vec![1]);
}

#[tokio::test(start_paused = true)]
async fn repeated_projection_accessors_return_the_same_view() {
    let vm = CounterViewModel::new();
    let first = vm.count();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);
    let _sub = first.subscribe(move |count| seen_clone.lock().push(*count));

    vm.increment().await;

    // A projection fetched later reads the same shared cache.
    assert_eq!(vm.count().get(), 1);
    assert_eq!(*seen.lock(), vec![1]);
}

#[tokio::test(start_paused = true)]
async fn dropped_projection_subscription_stops_notifications() {
    let vm = CounterViewModel::new();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);
    let sub = vm.count().subscribe(move |count| seen_clone.lock().push(*count));

    vm.increment().await;
    drop(sub);
    vm.increment().await;

    assert_eq!(*seen.lock(), vec![1]);
}
