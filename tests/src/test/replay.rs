use crate::util::{configuration::scheduled, init};
use votier::event::in_memory::InMemoryEventLog;
use votier::Engine;
use votier::ElectionDirectory;
use votier_common::types::Identity;

#[tokio::test]
async fn replayed_log_matches_live_state() {
    init();
    let directory = ElectionDirectory::default();
    let admin = Identity::from("0xadmin");
    let election = directory
        .deploy(admin.clone(), &scheduled(4, 1_000), 0)
        .await
        .unwrap();

    for name in &["A", "B", "C"] {
        election.add_candidate(admin.clone(), *name, 1).await.unwrap();
    }
    election.start_voting(admin.clone(), 2).await.unwrap();
    for (i, candidate) in [0u32, 2, 2, 0, 1].iter().enumerate() {
        let identity = Identity::from(format!("0x{}", i));
        election
            .vote(identity, *candidate, 10 + i as u64)
            .await
            .unwrap();
    }
    let _ = election.vote("0x0".into(), 1, 20).await;
    election.start_tie_breaker(admin.clone(), 30).await.unwrap();
    let _ = election.vote("0x9".into(), 1, 1_000).await;

    let entries = election.events(1, u64::MAX).await.unwrap();
    let replayed = Engine::<InMemoryEventLog>::replay(entries).unwrap();

    assert_eq!(*election.snapshot(), replayed.snapshot());
    assert_eq!(election.winner(), replayed.winner());
    assert_eq!(0, replayed.winner().unwrap().index);
}
