use std::time::Duration;

// Identifiable defines common traits that can be shared by catalogued objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}


// Configuration abstracts config options for the library system
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    // capacity of the bounded transaction-log channel
    pub max_log_capacity: usize,
    // throttle applied by the log consumer after each committed entry
    pub commit_delay: Duration,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            max_log_capacity: 100,
            commit_delay: Duration::from_secs(1),
        }
    }

    // Tests drive the consumer without wall-clock waits.
    pub fn with_commit_delay(commit_delay: Duration) -> Self {
        Configuration {
            commit_delay,
            ..Configuration::new()
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new();
        assert_eq!(100, config.max_log_capacity);
        assert_eq!(Duration::from_secs(1), config.commit_delay);
    }

    #[tokio::test]
    async fn test_should_build_config_with_commit_delay() {
        let config = Configuration::with_commit_delay(Duration::ZERO);
        assert_eq!(100, config.max_log_capacity);
        assert_eq!(Duration::ZERO, config.commit_delay);
    }
}
