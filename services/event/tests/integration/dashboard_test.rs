use chrono::Utc;
use serde_json::json;

use bingo_domain::member::MemberRole;
use bingo_event::domain::types::{FamilyMember, MissionCompletion};
use bingo_event::error::EventServiceError;
use bingo_event::usecase::dashboard::GetDashboardUseCase;

use crate::helpers::{
    EVENT_CODE, MockCompletionRepo, MockEventRepo, MockMemberRepo, MockMissionRepo,
    MockRegistrationRepo, test_event, test_mission, test_registration,
};

#[tokio::test]
async fn should_aggregate_registrations_members_and_missions() {
    let event = test_event();
    let a = test_registration(event.id, "A", Some("castillo"), 3);
    let b = test_registration(event.id, "B", Some("castillo"), 4);
    let c = test_registration(event.id, "C", None, 2);
    let now = Utc::now();
    let members = vec![
        FamilyMember::from_role(a.household_id, MemberRole::Mom, now),
        FamilyMember::from_role(a.household_id, MemberRole::Boy, now),
        FamilyMember::from_role(b.household_id, MemberRole::Teen, now),
        FamilyMember::from_role(c.household_id, MemberRole::Grandparent, now),
    ];
    let photo = test_mission(event.id, "M2_PHOTO", Some("foto"), 10);
    let completions = vec![MissionCompletion::new(photo.id, a.id, "default", json!({}))];

    let uc = GetDashboardUseCase {
        events: MockEventRepo::new(vec![event.clone()]),
        registrations: MockRegistrationRepo::new(vec![a, b, c]),
        members: MockMemberRepo::new(members),
        missions: MockMissionRepo::new(vec![photo]),
        completions: MockCompletionRepo::new(completions),
    };

    let (found_event, report) = uc.execute(EVENT_CODE).await.unwrap();

    assert_eq!(found_event.id, event.id);
    assert_eq!(report.totals.families, 3);
    assert_eq!(report.totals.attendees, 9);
    assert_eq!(report.totals.avg_per_family, 3.0);
    assert_eq!(report.areas[0].area, "castillo");
    assert_eq!(report.areas[0].attendees, 7);
    assert_eq!(report.areas[0].attendees_per_family, 3.5);
    assert_eq!(report.areas[1].area, "desconocida");
    assert_eq!(report.roles.children, 1);
    assert_eq!(report.roles.teens, 1);
    assert_eq!(report.roles.adults, 1);
    assert_eq!(report.roles.grandparents, 1);
    assert_eq!(report.missions[0].completed_count, 1);
    assert_eq!(report.missions[0].completion_rate, 33.3);
}

#[tokio::test]
async fn should_report_twenty_percent_completion() {
    let event = test_event();
    let regs: Vec<_> = (0..10)
        .map(|i| test_registration(event.id, &format!("Team {i}"), Some("cali"), 2))
        .collect();
    let vote = test_mission(event.id, "M3_VOTE", Some("votar"), 5);
    let completions = vec![
        MissionCompletion::new(vote.id, regs[0].id, "default", json!({})),
        MissionCompletion::new(vote.id, regs[1].id, "default", json!({})),
    ];

    let uc = GetDashboardUseCase {
        events: MockEventRepo::new(vec![event]),
        registrations: MockRegistrationRepo::new(regs),
        members: MockMemberRepo::new(vec![]),
        missions: MockMissionRepo::new(vec![vote]),
        completions: MockCompletionRepo::new(completions),
    };

    let (_, report) = uc.execute(EVENT_CODE).await.unwrap();

    assert_eq!(report.missions[0].completed_count, 2);
    assert_eq!(report.missions[0].completion_rate, 20.0);
}

#[tokio::test]
async fn should_return_zeroed_report_without_registrations() {
    let event = test_event();

    let uc = GetDashboardUseCase {
        events: MockEventRepo::new(vec![event.clone()]),
        registrations: MockRegistrationRepo::empty(),
        members: MockMemberRepo::new(vec![]),
        missions: MockMissionRepo::new(vec![test_mission(event.id, "M2_PHOTO", Some("foto"), 10)]),
        completions: MockCompletionRepo::empty(),
    };

    let (_, report) = uc.execute(EVENT_CODE).await.unwrap();

    assert_eq!(report.totals.families, 0);
    assert_eq!(report.totals.avg_per_family, 0.0);
    assert!(report.areas.is_empty());
    assert_eq!(report.missions.len(), 1);
    assert_eq!(report.missions[0].completion_rate, 0.0);
}

#[tokio::test]
async fn should_degrade_when_completions_fail() {
    let event = test_event();
    let reg = test_registration(event.id, "A", Some("jamundi"), 2);

    let uc = GetDashboardUseCase {
        events: MockEventRepo::new(vec![event.clone()]),
        registrations: MockRegistrationRepo::new(vec![reg]),
        members: MockMemberRepo::new(vec![]),
        missions: MockMissionRepo::new(vec![test_mission(event.id, "M2_PHOTO", Some("foto"), 10)]),
        completions: MockCompletionRepo::failing(),
    };

    let (_, report) = uc.execute(EVENT_CODE).await.unwrap();

    assert_eq!(report.totals.families, 1);
    assert_eq!(report.missions[0].completed_count, 0);
}

#[tokio::test]
async fn should_fail_when_missions_cannot_load() {
    let uc = GetDashboardUseCase {
        events: MockEventRepo::new(vec![test_event()]),
        registrations: MockRegistrationRepo::empty(),
        members: MockMemberRepo::new(vec![]),
        missions: MockMissionRepo::failing(),
        completions: MockCompletionRepo::empty(),
    };

    let result = uc.execute(EVENT_CODE).await;

    assert!(
        matches!(result, Err(EventServiceError::Internal(_))),
        "expected Internal, got {result:?}"
    );
}

#[tokio::test]
async fn should_read_members_written_by_registration() {
    use bingo_event::usecase::registration::{RegisterFamilyInput, RegisterFamilyUseCase};

    let event = test_event();
    let registrations = MockRegistrationRepo::empty();
    let members = MockMemberRepo::sharing(&registrations);
    let shared_registrations = registrations.registrations_handle();

    RegisterFamilyUseCase {
        events: MockEventRepo::new(vec![event.clone()]),
        registrations,
        missions: MockMissionRepo::empty(),
        completions: MockCompletionRepo::empty(),
    }
    .execute(RegisterFamilyInput {
        event_code: EVENT_CODE.to_owned(),
        family_size: Some(2),
        team_name: Some("Pareja".to_owned()),
        members: Some(vec![MemberRole::Mom, MemberRole::Dad]),
        area: Some("alfaguara".to_owned()),
        interests: vec!["food".to_owned()],
        source: None,
        raw_payload: json!({}),
    })
    .await
    .unwrap();

    let stored = shared_registrations.lock().unwrap().clone();
    let uc = GetDashboardUseCase {
        events: MockEventRepo::new(vec![event]),
        registrations: MockRegistrationRepo::new(stored),
        members,
        missions: MockMissionRepo::empty(),
        completions: MockCompletionRepo::empty(),
    };

    let (_, report) = uc.execute(EVENT_CODE).await.unwrap();

    assert_eq!(report.roles.adults, 2);
    assert_eq!(report.age_groups.get("36_50"), Some(&2));
    assert_eq!(report.interests[0].id, "food");
}
