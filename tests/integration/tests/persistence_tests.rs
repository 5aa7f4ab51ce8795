//! Persistence integration tests
//!
//! The three maps must survive a restart of the store handle.

use std::path::PathBuf;

use agora_service::{CommunityService, UserService};
use integration_tests::fixtures;
use integration_tests::helpers::{request_as, TestBackend};

fn scratch_dir(tag: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("agora-it-{tag}-{}", std::process::id()));
    path
}

#[tokio::test]
async fn state_survives_reopen() {
    let dir = scratch_dir("reopen");
    let _ = std::fs::remove_dir_all(&dir);

    {
        let backend = TestBackend::open_at(&dir).unwrap();
        let users = UserService::new(backend.ctx());
        let communities = CommunityService::new(backend.ctx());

        users
            .register_user(&request_as("alice-id"), fixtures::register("alice"))
            .await
            .unwrap();
        communities
            .create_community(
                &request_as("alice-id"),
                fixtures::create_community("devs", "alice"),
            )
            .await
            .unwrap();

        backend.flush().unwrap();
    }

    // reopen the same path: all three maps are restored
    let backend = TestBackend::open_at(&dir).unwrap();
    let communities = CommunityService::new(backend.ctx());

    let user = backend
        .ctx()
        .user_store()
        .find("alice")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.id.as_str(), "alice-id");
    assert_eq!(user.groups_created, vec!["devs"]);

    let community = backend
        .ctx()
        .community_store()
        .find("devs")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(community.members, vec!["alice"]);
    assert_eq!(community.owner.as_str(), "alice-id");

    let listing = communities.list_communities().await.unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].name, "devs");

    drop(backend);
    let _ = std::fs::remove_dir_all(&dir);
}
