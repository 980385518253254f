use serde_json::json;

use bingo_domain::member::{AgeGroup, Gender, MemberRole};
use bingo_event::error::EventServiceError;
use bingo_event::usecase::registration::{RegisterFamilyInput, RegisterFamilyUseCase};

use crate::helpers::{
    EVENT_CODE, MockCompletionRepo, MockEventRepo, MockMissionRepo, MockRegistrationRepo,
    test_event, test_mission,
};

fn input(family_size: Option<i32>, team_name: Option<&str>, members: Option<Vec<MemberRole>>) -> RegisterFamilyInput {
    RegisterFamilyInput {
        event_code: EVENT_CODE.to_owned(),
        family_size,
        team_name: team_name.map(str::to_owned),
        members,
        area: Some("castillo".to_owned()),
        interests: vec!["music".to_owned(), "sports".to_owned()],
        source: None,
        raw_payload: json!({"familySize": family_size, "teamName": team_name}),
    }
}

#[tokio::test]
async fn should_register_household_members_and_registration() {
    let event = test_event();
    let registrations = MockRegistrationRepo::empty();
    let registrations_handle = registrations.registrations_handle();
    let members_handle = registrations.members_handle();

    let uc = RegisterFamilyUseCase {
        events: MockEventRepo::new(vec![event.clone()]),
        registrations,
        missions: MockMissionRepo::empty(),
        completions: MockCompletionRepo::empty(),
    };

    let output = uc
        .execute(input(
            Some(3),
            Some("  Los Tigres  "),
            Some(vec![MemberRole::Mom, MemberRole::Girl, MemberRole::Teacher]),
        ))
        .await
        .unwrap();

    assert_eq!(output.event_id, event.id);

    let registrations = registrations_handle.lock().unwrap();
    assert_eq!(registrations.len(), 1, "expected exactly one registration");
    let reg = &registrations[0];
    assert_eq!(reg.id, output.registration_id);
    assert_eq!(reg.household_id, output.household_id);
    assert_eq!(reg.team_name, "Los Tigres", "team name should be trimmed");
    assert_eq!(reg.source, "web");
    assert_eq!(reg.family_size, 3);
    assert_eq!(reg.interests, vec!["music", "sports"]);

    let members = members_handle.lock().unwrap();
    assert_eq!(members.len(), 3, "one member row per input member");
    assert!(members.iter().all(|m| m.household_id == output.household_id));
    let girl = members.iter().find(|m| m.role == MemberRole::Girl).unwrap();
    assert_eq!(girl.gender, Some(Gender::Female));
    assert_eq!(girl.age_group, Some(AgeGroup::Age6To12));
    assert!(girl.is_student);
    let teacher = members.iter().find(|m| m.role == MemberRole::Teacher).unwrap();
    assert!(teacher.is_staff);
}

#[tokio::test]
async fn should_mark_only_unknown_roles_external() {
    let registrations = MockRegistrationRepo::empty();
    let members_handle = registrations.members_handle();

    let uc = RegisterFamilyUseCase {
        events: MockEventRepo::new(vec![test_event()]),
        registrations,
        missions: MockMissionRepo::empty(),
        completions: MockCompletionRepo::empty(),
    };

    uc.execute(input(
        Some(4),
        Some("Los Abuelos"),
        Some(vec![
            MemberRole::Mom,
            MemberRole::Dad,
            MemberRole::Grandparent,
            MemberRole::parse("neighbour"),
        ]),
    ))
    .await
    .unwrap();

    let members = members_handle.lock().unwrap();
    assert_eq!(members.len(), 4);
    for member in members.iter() {
        let expected = matches!(member.role, MemberRole::Other(_));
        assert_eq!(
            member.is_external, expected,
            "unexpected is_external for role {}",
            member.role
        );
    }
    let neighbour = members
        .iter()
        .find(|m| m.role == MemberRole::Other("neighbour".to_owned()))
        .unwrap();
    assert_eq!(neighbour.gender, None);
    assert_eq!(neighbour.age_group, None);
}

#[tokio::test]
async fn should_auto_complete_registration_mission() {
    let event = test_event();
    let m1 = test_mission(event.id, "M1_REGISTER", None, 5);
    let completions = MockCompletionRepo::empty();
    let completions_handle = completions.completions_handle();

    let uc = RegisterFamilyUseCase {
        events: MockEventRepo::new(vec![event.clone()]),
        registrations: MockRegistrationRepo::empty(),
        missions: MockMissionRepo::new(vec![m1.clone()]),
        completions,
    };

    let output = uc
        .execute(input(Some(2), Some("Equipo Sol"), Some(vec![MemberRole::Dad, MemberRole::Boy])))
        .await
        .unwrap();

    let completions = completions_handle.lock().unwrap();
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].mission_id, m1.id);
    assert_eq!(completions[0].registration_id, output.registration_id);
    assert_eq!(completions[0].location_code, "registration-flow");
    assert_eq!(completions[0].data, json!({}));
}

#[tokio::test]
async fn should_succeed_when_registration_mission_fails() {
    let event = test_event();
    let registrations = MockRegistrationRepo::empty();
    let registrations_handle = registrations.registrations_handle();

    let uc = RegisterFamilyUseCase {
        events: MockEventRepo::new(vec![event.clone()]),
        registrations,
        missions: MockMissionRepo::new(vec![test_mission(event.id, "M1_REGISTER", None, 5)]),
        completions: MockCompletionRepo::failing(),
    };

    let result = uc
        .execute(input(Some(1), Some("Solo"), Some(vec![MemberRole::Grandparent])))
        .await;

    assert!(result.is_ok(), "auto-completion failure must not fail registration, got {result:?}");
    assert_eq!(registrations_handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_succeed_when_mission_lookup_fails() {
    let uc = RegisterFamilyUseCase {
        events: MockEventRepo::new(vec![test_event()]),
        registrations: MockRegistrationRepo::empty(),
        missions: MockMissionRepo::failing(),
        completions: MockCompletionRepo::empty(),
    };

    let result = uc
        .execute(input(Some(2), Some("Equipo Luna"), Some(vec![MemberRole::Mom])))
        .await;

    assert!(result.is_ok(), "expected success, got {result:?}");
}

#[tokio::test]
async fn should_reject_non_positive_family_size() {
    for size in [None, Some(0), Some(-2)] {
        let uc = RegisterFamilyUseCase {
            events: MockEventRepo::new(vec![test_event()]),
            registrations: MockRegistrationRepo::empty(),
            missions: MockMissionRepo::empty(),
            completions: MockCompletionRepo::empty(),
        };
        let result = uc
            .execute(input(size, Some("Team"), Some(vec![MemberRole::Dad])))
            .await;
        assert!(
            matches!(result, Err(EventServiceError::InvalidFamilySize)),
            "expected InvalidFamilySize for {size:?}, got {result:?}"
        );
    }
}

#[tokio::test]
async fn should_reject_blank_team_name() {
    let uc = RegisterFamilyUseCase {
        events: MockEventRepo::new(vec![test_event()]),
        registrations: MockRegistrationRepo::empty(),
        missions: MockMissionRepo::empty(),
        completions: MockCompletionRepo::empty(),
    };

    let result = uc
        .execute(input(Some(2), Some("   "), Some(vec![MemberRole::Dad])))
        .await;

    assert!(
        matches!(result, Err(EventServiceError::TeamNameRequired)),
        "expected TeamNameRequired, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_empty_members() {
    for members in [None, Some(vec![])] {
        let uc = RegisterFamilyUseCase {
            events: MockEventRepo::new(vec![test_event()]),
            registrations: MockRegistrationRepo::empty(),
            missions: MockMissionRepo::empty(),
            completions: MockCompletionRepo::empty(),
        };
        let result = uc.execute(input(Some(2), Some("Team"), members)).await;
        assert!(
            matches!(result, Err(EventServiceError::MembersRequired)),
            "expected MembersRequired, got {result:?}"
        );
    }
}

#[tokio::test]
async fn should_validate_before_looking_up_event() {
    let uc = RegisterFamilyUseCase {
        events: MockEventRepo::empty(),
        registrations: MockRegistrationRepo::empty(),
        missions: MockMissionRepo::empty(),
        completions: MockCompletionRepo::empty(),
    };

    let result = uc.execute(input(Some(0), None, None)).await;

    assert!(
        matches!(result, Err(EventServiceError::InvalidFamilySize)),
        "expected InvalidFamilySize, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_event_not_found() {
    let uc = RegisterFamilyUseCase {
        events: MockEventRepo::empty(),
        registrations: MockRegistrationRepo::empty(),
        missions: MockMissionRepo::empty(),
        completions: MockCompletionRepo::empty(),
    };

    let result = uc
        .execute(input(Some(2), Some("Team"), Some(vec![MemberRole::Mom])))
        .await;

    assert!(
        matches!(result, Err(EventServiceError::EventNotFound)),
        "expected EventNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_propagate_failed_write_without_completing_mission() {
    let event = test_event();
    let completions = MockCompletionRepo::empty();
    let completions_handle = completions.completions_handle();

    let uc = RegisterFamilyUseCase {
        events: MockEventRepo::new(vec![event.clone()]),
        registrations: MockRegistrationRepo::failing(),
        missions: MockMissionRepo::new(vec![test_mission(event.id, "M1_REGISTER", None, 5)]),
        completions,
    };

    let result = uc
        .execute(input(Some(2), Some("Team"), Some(vec![MemberRole::Mom])))
        .await;

    assert!(
        matches!(result, Err(EventServiceError::Internal(_))),
        "expected Internal, got {result:?}"
    );
    assert!(completions_handle.lock().unwrap().is_empty());
}
