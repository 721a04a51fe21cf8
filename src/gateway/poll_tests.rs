//! Tests for `PollPolicy`.

use std::time::Duration;

use super::PollPolicy;

mod poll_policy_defaults {
    use super::*;

    #[test]
    fn new_creates_policy_with_defaults() {
        let policy = PollPolicy::new();

        assert_eq!(policy.max_attempts, PollPolicy::DEFAULT_MAX_ATTEMPTS);
        assert_eq!(policy.delay, PollPolicy::DEFAULT_DELAY);
    }

    #[test]
    fn default_trait_matches_new() {
        assert_eq!(PollPolicy::new(), PollPolicy::default());
    }

    #[test]
    fn default_max_attempts_is_10() {
        assert_eq!(PollPolicy::DEFAULT_MAX_ATTEMPTS, 10);
    }

    #[test]
    fn default_delay_is_2_seconds() {
        assert_eq!(PollPolicy::DEFAULT_DELAY, Duration::from_secs(2));
    }
}

mod poll_policy_builder {
    use super::*;

    #[test]
    fn with_max_attempts_sets_value() {
        let policy = PollPolicy::new().with_max_attempts(5);
        assert_eq!(policy.max_attempts, 5);
    }

    #[test]
    #[should_panic(expected = "max_attempts must be at least 1")]
    fn with_max_attempts_zero_panics() {
        let _ = PollPolicy::new().with_max_attempts(0);
    }

    #[test]
    fn with_delay_sets_value() {
        let delay = Duration::from_millis(100);
        let policy = PollPolicy::new().with_delay(delay);
        assert_eq!(policy.delay, delay);
    }

    #[test]
    fn with_delay_zero_is_allowed() {
        let policy = PollPolicy::new().with_delay(Duration::ZERO);
        assert_eq!(policy.delay, Duration::ZERO);
    }
}

mod poll_policy_predicates {
    use super::*;

    #[test]
    fn should_continue_before_last_attempt() {
        let policy = PollPolicy::new().with_max_attempts(3);

        assert!(policy.should_continue(1));
        assert!(policy.should_continue(2));
    }

    #[test]
    fn should_not_continue_at_last_attempt() {
        let policy = PollPolicy::new().with_max_attempts(3);

        assert!(!policy.should_continue(3));
        assert!(!policy.should_continue(4));
    }

    #[test]
    fn single_attempt_policy_never_continues() {
        let policy = PollPolicy::new().with_max_attempts(1);
        assert!(!policy.should_continue(1));
    }
}
