use crate::util::{configuration::capped, init};
use futures::StreamExt;
use votier::event::Event;
use votier::ElectionDirectory;
use votier_common::types::{ElectionId, Identity};

#[tokio::test]
async fn events_are_ordered_and_queryable() {
    init();
    let directory = ElectionDirectory::default();
    let admin = Identity::from("0xadmin");
    let election = directory.deploy(admin.clone(), &capped(2), 100).await.unwrap();
    election.add_candidate(admin.clone(), "A", 101).await.unwrap();
    election.vote("0x1".into(), 0, 102).await.unwrap();
    let _ = election.vote("0x1".into(), 0, 103).await;
    election.vote("0x2".into(), 0, 104).await.unwrap();

    let events = election.events(0, u64::MAX).await.unwrap();
    let sequences = events.iter().map(|e| e.sequence()).collect::<Vec<_>>();
    assert_eq!(vec![1, 2, 3, 4], sequences);

    match events[0].event() {
        Event::ContractDeployed {
            creator,
            election: id,
            config,
        } => {
            assert_eq!(&admin, creator);
            assert_eq!(ElectionId::from(1), *id);
            assert_eq!(100, config.creation_time);
            assert_eq!(2, config.max_candidates_count);
        }
        e => panic!("unexpected event: {:?}", e),
    }

    let votes = election
        .events(3, 4)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.into_event())
        .collect::<Vec<_>>();
    assert_eq!(
        vec![
            Event::Voted {
                identity: "0x1".into(),
                candidate: 0,
                timestamp: 102
            },
            Event::Voted {
                identity: "0x2".into(),
                candidate: 0,
                timestamp: 104
            },
        ],
        votes
    );
    assert!(election.events(5, 10).await.unwrap().is_empty());
}

#[tokio::test]
async fn subscribers_tail_committed_events() {
    init();
    let directory = ElectionDirectory::default();
    let admin = Identity::from("0xadmin");
    let election = directory.deploy(admin.clone(), &capped(2), 0).await.unwrap();

    let feed = election.subscribe();
    tokio::pin!(feed);

    election.add_candidate(admin.clone(), "A", 1).await.unwrap();
    // rejected commands are not broadcast
    let _ = election.add_candidate(admin.clone(), "", 2).await;
    election.vote("0x1".into(), 0, 3).await.unwrap();

    let first = feed.next().await.unwrap();
    assert_eq!(2, first.sequence());
    assert_eq!(
        &Event::CandidateAdded {
            index: 0,
            name: "A".to_string(),
            at: 1
        },
        first.event()
    );
    let second = feed.next().await.unwrap();
    assert_eq!(3, second.sequence());
    assert_eq!("Voted", second.event().kind());
}
