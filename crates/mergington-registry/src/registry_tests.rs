
    use super::*;
    use crate::error::ErrorKind;
    use std::sync::Arc;
    use std::thread;

    fn chess_only() -> ActivityRegistry {
        let catalog = Catalog::new(vec![Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )]);
        ActivityRegistry::from_catalog(catalog).unwrap()
    }

    fn participants(registry: &ActivityRegistry, name: &str) -> Vec<String> {
        registry.get(name).unwrap().participants
    }

    #[test]
    fn test_default_registry() {
        let registry = ActivityRegistry::default();
        assert_eq!(registry.len(), 9);
        assert!(registry.contains("Chess Club"));
        assert!(!registry.contains("chess club"));
        assert_eq!(registry.names()[0], "Chess Club");
    }

    #[test]
    fn test_from_catalog_rejects_invalid() {
        let catalog = Catalog::new(vec![
            Activity::new("Math Club", "", "", 10),
            Activity::new("Math Club", "", "", 10),
        ]);
        assert!(ActivityRegistry::from_catalog(catalog).is_err());
    }

    #[test]
    fn test_empty_registry() {
        let registry = ActivityRegistry::from_catalog(Catalog::default()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.list_activities().is_empty());
    }

    #[test]
    fn test_list_activities_in_catalog_order() {
        let registry = ActivityRegistry::default();
        let listing = registry.list_activities();
        assert_eq!(listing.names(), registry.names());
        assert!(listing.get("Chess Club").unwrap().participants.len() >= 1);
    }

    #[test]
    fn test_signup_appends() {
        let registry = ActivityRegistry::default();
        let before = participants(&registry, "Chess Club");

        let message = registry
            .signup("Chess Club", "newstudent@mergington.edu")
            .unwrap();
        assert_eq!(
            message,
            "Signed up newstudent@mergington.edu for Chess Club"
        );

        let after = participants(&registry, "Chess Club");
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last().unwrap(), "newstudent@mergington.edu");
        assert_eq!(&after[..before.len()], &before[..]);
    }

    #[test]
    fn test_signup_duplicate_is_conflict() {
        let registry = chess_only();
        registry.signup("Chess Club", "a@x.edu").unwrap();

        let err = registry.signup("Chess Club", "a@x.edu").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.to_string(), "Student already signed up for this activity");
        assert_eq!(participants(&registry, "Chess Club"), vec!["a@x.edu"]);
    }

    #[test]
    fn test_signup_existing_seed_participant_is_conflict() {
        let registry = ActivityRegistry::default();
        let email = participants(&registry, "Basketball Team")[0].clone();
        let before = participants(&registry, "Basketball Team");

        let err = registry.signup("Basketball Team", &email).unwrap_err();
        assert!(matches!(err, RegistryError::AlreadySignedUp { .. }));
        assert_eq!(participants(&registry, "Basketball Team"), before);
    }

    #[test]
    fn test_unknown_activity_is_not_found() {
        let registry = ActivityRegistry::default();
        let before = registry.list_activities();

        let err = registry.signup("Unknown Club", "x@y.edu").unwrap_err();
        assert_eq!(err, RegistryError::NotFound("Unknown Club".to_string()));
        assert_eq!(err.to_string(), "Activity not found");

        let err = registry.unregister("Unknown Club", "x@y.edu").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        assert_eq!(registry.list_activities(), before);
    }

    #[test]
    fn test_lookup_is_exact() {
        let registry = ActivityRegistry::default();
        for name in ["chess club", "Chess Club ", " Chess Club", "Chess%20Club"] {
            let err = registry.signup(name, "x@y.edu").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NotFound, "{:?}", name);
        }
    }

    #[test]
    fn test_unregister_preserves_order() {
        let catalog = Catalog::new(vec![Activity::new("Drama Club", "", "", 25)
            .with_participants(["a@x.edu", "b@x.edu", "c@x.edu", "d@x.edu"])]);
        let registry = ActivityRegistry::from_catalog(catalog).unwrap();

        let message = registry.unregister("Drama Club", "b@x.edu").unwrap();
        assert_eq!(message, "Unregistered b@x.edu from Drama Club");
        assert_eq!(
            participants(&registry, "Drama Club"),
            vec!["a@x.edu", "c@x.edu", "d@x.edu"]
        );
    }

    #[test]
    fn test_unregister_absent_is_conflict() {
        let registry = ActivityRegistry::default();
        let before = participants(&registry, "Chess Club");

        let err = registry
            .unregister("Chess Club", "absent@mergington.edu")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.to_string(), "Student is not registered for this activity");
        assert_eq!(participants(&registry, "Chess Club"), before);
    }

    #[test]
    fn test_signup_then_unregister_round_trip() {
        let registry = ActivityRegistry::default();
        let before = participants(&registry, "Art Club");

        registry.signup("Art Club", "painter@mergington.edu").unwrap();
        registry.unregister("Art Club", "painter@mergington.edu").unwrap();

        assert_eq!(participants(&registry, "Art Club"), before);
    }

    #[test]
    fn test_chess_club_scenario() {
        let registry = chess_only();
        assert!(participants(&registry, "Chess Club").is_empty());

        assert!(registry.signup("Chess Club", "a@x.edu").is_ok());
        assert_eq!(participants(&registry, "Chess Club"), vec!["a@x.edu"]);

        assert!(registry.signup("Chess Club", "a@x.edu").is_err());
        assert_eq!(participants(&registry, "Chess Club"), vec!["a@x.edu"]);

        assert!(registry.unregister("Chess Club", "a@x.edu").is_ok());
        assert!(participants(&registry, "Chess Club").is_empty());

        let err = registry.unregister("Chess Club", "a@x.edu").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn test_email_is_opaque() {
        let registry = chess_only();
        registry.signup("Chess Club", "not an email").unwrap();
        registry.signup("Chess Club", "").unwrap();
        assert_eq!(participants(&registry, "Chess Club").len(), 2);
    }

    #[test]
    fn test_listing_is_a_snapshot() {
        let registry = chess_only();
        let listing = registry.list_activities();
        registry.signup("Chess Club", "late@x.edu").unwrap();

        assert!(listing.get("Chess Club").unwrap().participants.is_empty());
        assert_eq!(participants(&registry, "Chess Club"), vec!["late@x.edu"]);
    }

    #[test]
    fn test_concurrent_duplicate_signup_admits_one() {
        let registry = Arc::new(chess_only());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = registry.clone();
                thread::spawn(move || registry.signup("Chess Club", "race@x.edu").is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(participants(&registry, "Chess Club"), vec!["race@x.edu"]);
    }

    #[test]
    fn test_concurrent_distinct_signups() {
        let registry = Arc::new(chess_only());

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let registry = registry.clone();
                thread::spawn(move || {
                    registry
                        .signup("Chess Club", &format!("student{}@x.edu", i))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(participants(&registry, "Chess Club").len(), 20);
    }
