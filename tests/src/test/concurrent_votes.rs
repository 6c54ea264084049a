use crate::util::{configuration::capped, init};
use votier::ElectionDirectory;
use votier_common::error::ElectionError;
use votier_common::types::Identity;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn every_identity_votes_once() {
    init();
    let directory = ElectionDirectory::default();
    let admin = Identity::from("0xadmin");
    let election = directory.deploy(admin.clone(), &capped(3), 0).await.unwrap();
    for name in &["A", "B", "C"] {
        election.add_candidate(admin.clone(), *name, 0).await.unwrap();
    }

    // 50 voters, each trying three times concurrently
    let attempts = (0..150u64).map(|i| {
        let election = election.clone();
        let identity = Identity::from(format!("0x{}", i % 50));
        let candidate = (i % 3) as u32;
        tokio::spawn(async move { election.vote(identity, candidate, i + 1).await })
    });
    let results = futures::future::join_all(attempts).await;

    let mut accepted = 0;
    for res in results {
        match res.unwrap() {
            Ok(_) => accepted += 1,
            Err(e) => assert!(matches!(
                e.election_error(),
                Some(ElectionError::AlreadyVoted(_))
            )),
        }
    }
    assert_eq!(50, accepted);

    let total: u64 = election.candidates().iter().map(|c| c.vote_count()).sum();
    assert_eq!(50, total);
    assert_eq!(50, election.snapshot().voters().len());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn roster_never_exceeds_capacity() {
    init();
    let directory = ElectionDirectory::default();
    let admin = Identity::from("0xadmin");
    let election = directory.deploy(admin.clone(), &capped(5), 0).await.unwrap();

    let adds = (0..20u64).map(|i| {
        let election = election.clone();
        let admin = admin.clone();
        tokio::spawn(async move { election.add_candidate(admin, format!("C{}", i), i).await })
    });
    let results = futures::future::join_all(adds).await;

    let mut indices = results
        .into_iter()
        .filter_map(|res| res.unwrap().ok())
        .collect::<Vec<_>>();
    indices.sort_unstable();
    assert_eq!(vec![0, 1, 2, 3, 4], indices);

    let candidates = election.candidates();
    assert_eq!(5, candidates.len());
    for (i, c) in candidates.iter().enumerate() {
        assert_eq!(i as u32, c.index());
    }
}
