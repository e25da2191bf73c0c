//! Test utilities
//!
//! In-memory capabilities for exercising the orchestrator without spawning
//! processes, and generators for proptest.

#[cfg(test)]
pub mod fakes {
    use std::collections::HashSet;
    use std::io;

    use crate::error::ExecError;
    use crate::infra::{ExecRunner, FileChecker};

    /// One recorded process invocation
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Invocation {
        pub program: String,
        pub args: Vec<String>,
    }

    /// Recording runner plus a fixed set of existing files
    #[derive(Debug, Default)]
    pub struct FakeUtils {
        files: HashSet<String>,
        broken_checks: HashSet<String>,
        failing_calls: HashSet<usize>,
        /// Every invocation, including failed ones, in call order
        pub invocations: Vec<Invocation>,
    }

    impl FakeUtils {
        /// Utilities where exactly `files` exist
        pub fn with_files(files: &[&str]) -> Self {
            Self {
                files: files.iter().map(|f| (*f).to_string()).collect(),
                ..Default::default()
            }
        }

        /// Make the existence check of `path` fail with an I/O error
        pub fn fail_check(&mut self, path: &str) {
            self.broken_checks.insert(path.to_string());
        }

        /// Make the `index`-th invocation (zero-based) exit with status 1
        pub fn fail_on(&mut self, index: usize) {
            self.failing_calls.insert(index);
        }
    }

    impl ExecRunner for FakeUtils {
        async fn run_executable(&mut self, program: &str, args: &[String]) -> Result<(), ExecError> {
            let index = self.invocations.len();
            self.invocations.push(Invocation {
                program: program.to_string(),
                args: args.to_vec(),
            });
            if self.failing_calls.contains(&index) {
                return Err(ExecError::ExitStatus {
                    program: program.to_string(),
                    code: Some(1),
                });
            }
            Ok(())
        }
    }

    impl FileChecker for FakeUtils {
        fn file_exists(&self, path: &str) -> io::Result<bool> {
            if self.broken_checks.contains(path) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
            }
            Ok(self.files.contains(path))
        }
    }
}

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    use crate::core::options::PythonBuildOptions;

    /// Generate a `python -m build` flag
    pub fn build_flag() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("--sdist".to_string()),
            Just("--wheel".to_string()),
            Just("--no-isolation".to_string()),
            "--outdir=[a-z]{1,8}",
            "-C[a-z]{1,8}=[a-z0-9]{1,8}",
        ]
    }

    /// Generate a user name or password, including awkward characters
    pub fn credential() -> impl Strategy<Value = String> {
        "[ -~]{0,24}"
    }

    /// Generate a repository upload URL
    pub fn repository_url() -> impl Strategy<Value = String> {
        ("[a-z]{3,10}", "[a-z]{2,5}", "[a-z0-9-]{1,12}")
            .prop_map(|(domain, tld, path)| format!("https://{domain}.{tld}/{path}/"))
    }

    /// Generate a complete set of options
    pub fn options() -> impl Strategy<Value = PythonBuildOptions> {
        (
            proptest::collection::vec(build_flag(), 0..4),
            any::<bool>(),
            any::<bool>(),
            credential(),
            credential(),
            repository_url(),
        )
            .prop_map(
                |(build_flags, create_bom, publish, user, password, url)| PythonBuildOptions {
                    build_flags,
                    create_bom,
                    publish,
                    target_repository_user: user,
                    target_repository_password: password,
                    target_repository_url: url,
                },
            )
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_build_flag_generator(flag in build_flag()) {
            prop_assert!(flag.starts_with('-'));
        }

        #[test]
        fn test_repository_url_generator(url in repository_url()) {
            prop_assert!(url.starts_with("https://"));
            prop_assert!(url.ends_with('/'));
        }
    }
}
