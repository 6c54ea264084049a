use crate::util::{configuration::capped, configuration::creator_only, configuration::scheduled, init};
use votier::manager::error::CommandError;
use votier::phase::Stage;
use votier::ElectionDirectory;
use votier_common::error::ElectionError;
use votier_common::types::Identity;

const END: u64 = 1_735_349_700_000;

#[tokio::test]
async fn closes_at_scheduled_end() {
    init();
    let directory = ElectionDirectory::default();
    let admin = Identity::from("0xadmin");
    let election = directory
        .deploy(admin.clone(), &scheduled(10, END), 0)
        .await
        .unwrap();
    election.add_candidate(admin.clone(), "A", 1).await.unwrap();

    assert!(election.is_voting_open(END - 1));
    assert!(!election.is_voting_open(END));

    assert_eq!(Ok(1), election.vote("0x1".into(), 0, END - 1).await);
    assert_eq!(
        Err(CommandError::Election(ElectionError::VotingClosed)),
        election.vote("0x2".into(), 0, END).await
    );
    assert_eq!(
        Err(CommandError::Election(ElectionError::VotingClosed)),
        election.vote("0x3".into(), 0, END + 1).await
    );
    // a late vote is rejected on its own timestamp and closes nothing
    assert_eq!(Ok(2), election.vote("0x4".into(), 0, END - 1).await);
    assert_eq!(
        Err(CommandError::Election(ElectionError::ElectionEnded)),
        election.add_candidate(admin, "B", END + 2).await
    );
    assert_eq!(2, election.winner().unwrap().votes);
}

#[tokio::test]
async fn rejected_commands_do_not_change_state() {
    init();
    let directory = ElectionDirectory::default();
    let admin = Identity::from("0xadmin");
    let mallory = Identity::from("0xmallory");
    let mut conf = creator_only(2);
    conf.election.scheduled_end_timestamp = Some(END);
    let election = directory.deploy(admin.clone(), &conf, 0).await.unwrap();
    election.add_candidate(admin.clone(), "A", 1).await.unwrap();

    let before = election.snapshot();
    assert_eq!(
        Err(CommandError::Election(ElectionError::Unauthorized(mallory.clone()))),
        election.add_candidate(mallory.clone(), "M", END).await
    );
    assert_eq!(
        Err(CommandError::Election(ElectionError::Unauthorized(mallory.clone()))),
        election.start_voting(mallory.clone(), END).await
    );
    assert_eq!(
        Err(CommandError::Election(ElectionError::VotingClosed)),
        election.vote(mallory.clone(), 0, END).await
    );
    assert_eq!(before, election.snapshot());
    assert_eq!(2, election.snapshot().last_sequence());
    assert_eq!(2, election.events(1, u64::MAX).await.unwrap().len());
    assert!(election.is_voting_open(END - 1));
}

#[tokio::test]
async fn explicit_start_does_not_extend_scheduled_end() {
    init();
    let directory = ElectionDirectory::default();
    let admin = Identity::from("0xadmin");
    let election = directory
        .deploy(admin.clone(), &scheduled(10, END), 0)
        .await
        .unwrap();
    election.add_candidate(admin.clone(), "A", 1).await.unwrap();
    election.start_voting(admin.clone(), 2).await.unwrap();

    assert_eq!(
        Err(CommandError::Election(ElectionError::AlreadyStarted)),
        election.start_voting(admin.clone(), 3).await
    );
    assert_eq!(
        Err(CommandError::Election(ElectionError::VotingClosed)),
        election.vote("0x1".into(), 0, END).await
    );
    assert_eq!(Stage::Ended, election.snapshot().phase().stage(END));
    assert_eq!(Ok(true), election.end_voting(admin, END + 1).await);
    assert!(election.snapshot().phase().is_ended());
}

#[tokio::test]
async fn explicit_end() {
    init();
    let directory = ElectionDirectory::default();
    let admin = Identity::from("0xadmin");
    let election = directory.deploy(admin.clone(), &capped(2), 0).await.unwrap();
    election.add_candidate(admin.clone(), "A", 1).await.unwrap();
    election.add_candidate(admin.clone(), "B", 1).await.unwrap();
    election.vote("0x1".into(), 1, 2).await.unwrap();

    assert_eq!(Ok(true), election.end_voting(admin.clone(), 3).await);
    assert_eq!(Ok(false), election.end_voting(admin.clone(), 4).await);
    assert!(!election.is_voting_open(5));
    assert_eq!(
        Err(CommandError::Election(ElectionError::VotingClosed)),
        election.vote("0x2".into(), 0, 5).await
    );
    assert_eq!(
        Err(CommandError::Election(ElectionError::AlreadyStarted)),
        election.start_voting(admin, 6).await
    );
    assert_eq!(1, election.winner().unwrap().index);
}

#[tokio::test]
async fn tie_breaker_after_end() {
    init();
    let directory = ElectionDirectory::default();
    let admin = Identity::from("0xadmin");
    let election = directory
        .deploy(admin.clone(), &scheduled(2, END), 0)
        .await
        .unwrap();
    election.add_candidate(admin.clone(), "A", 1).await.unwrap();
    election.add_candidate(admin.clone(), "B", 1).await.unwrap();
    election.vote("0x1".into(), 1, 2).await.unwrap();
    election.vote("0x2".into(), 0, 3).await.unwrap();

    assert_eq!(Ok(()), election.start_tie_breaker(admin, END + 10).await);
    assert_eq!(Stage::Ended, election.snapshot().phase().stage(END + 10));
    assert_eq!("A", election.winner().unwrap().name);
}
