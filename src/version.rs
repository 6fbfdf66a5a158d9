use std::fmt;

// Include the generated build information
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub struct VersionInfo {
    pub version: &'static str,
    pub commit_hash: Option<&'static str>,
    pub commit_hash_short: Option<&'static str>,
    pub git_version: Option<&'static str>,
    pub is_dirty: bool,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc_version: &'static str,
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionInfo {
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: built_info::PKG_VERSION,
            commit_hash: built_info::GIT_COMMIT_HASH,
            commit_hash_short: built_info::GIT_COMMIT_HASH_SHORT,
            git_version: built_info::GIT_VERSION,
            is_dirty: built_info::GIT_DIRTY.unwrap_or(false),
            target: built_info::TARGET,
            profile: built_info::PROFILE,
            rustc_version: built_info::RUSTC_VERSION,
        }
    }

    /// Number of commits since the last tag, parsed from `git describe`
    /// output such as "v0.1.0-15-ge1c9641"
    #[must_use]
    pub fn commits_since_tag(&self) -> Option<u32> {
        let git_version = self.git_version?;
        let mut parts = git_version.rsplitn(3, '-');
        let _hash = parts.next()?;
        let count = parts.next()?;
        parts.next()?;
        count.parse().ok()
    }

    #[must_use]
    pub fn is_development_build(&self) -> bool {
        self.is_dirty || self.profile == "debug" || self.commits_since_tag().is_some_and(|n| n > 0)
    }

    #[must_use]
    pub fn short_version(&self) -> String {
        if !self.is_development_build() {
            return format!("v{}", self.version);
        }

        let mut build = Vec::new();
        if let Some(count) = self.commits_since_tag() {
            build.push(count.to_string());
        }
        if let Some(hash) = self.commit_hash_short {
            build.push(hash.to_string());
        }
        if self.is_dirty {
            build.push("dirty".to_string());
        }

        if build.is_empty() {
            format!("v{}-dev", self.version)
        } else {
            format!("v{}-dev+{}", self.version, build.join("."))
        }
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "uint160-printer\n\nVersion: {}", self.short_version())?;

        if self.is_development_build() {
            if let Some(git_version) = self.git_version {
                writeln!(f, "Git version notation: {git_version}")?;
            }
            if let Some(commit_hash) = self.commit_hash {
                writeln!(f, "Commit hash: {commit_hash}")?;
            }
            if let Some(commits_ahead) = self.commits_since_tag() {
                writeln!(f, "Commits since last tag: {commits_ahead}")?;
            }
            if self.is_dirty {
                writeln!(f, "Working directory: dirty")?;
            }

            writeln!(f, "Profile: {}", self.profile)?;
            writeln!(f, "Target: {}", self.target)?;
            writeln!(f, "Rust: {}", self.rustc_version)?;
        }

        Ok(())
    }
}

#[must_use]
pub fn get_version_info() -> VersionInfo {
    VersionInfo::new()
}
