use crate::error::{Result, StoreError};
use careerwatch_core::{CoreError, Target};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed list of targets.
///
/// Records are `company:url`, split on the first colon only so URLs keep
/// their own colons. Order in the file is the order targets are searched.
#[derive(Debug, Clone)]
pub struct UrlStore {
    path: PathBuf,
}

impl UrlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all targets. A missing file is an empty list.
    pub fn load(&self) -> Result<Vec<Target>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("URL file {} not found, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let mut targets = Vec::new();
        for (idx, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line) {
                Some(target) => targets.push(target),
                None => tracing::warn!(
                    "Skipping malformed line {} in {}: {:?}",
                    idx + 1,
                    self.path.display(),
                    line
                ),
            }
        }

        Ok(targets)
    }

    /// Overwrite the file with `targets`.
    pub fn save(&self, targets: &[Target]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let mut contents = String::new();
        for target in targets {
            contents.push_str(&target.company);
            contents.push(':');
            contents.push_str(&target.url);
            contents.push('\n');
        }

        fs::write(&self.path, contents).map_err(|e| self.io_error(e))?;
        tracing::debug!("Saved {} target(s) to {}", targets.len(), self.path.display());
        Ok(())
    }

    /// Append a validated target, rejecting an exact duplicate.
    pub fn add(&self, target: Target) -> Result<()> {
        let target = Target::new(target.company.trim(), target.url.trim());
        target.validate()?;
        if target.company.contains(':') {
            return Err(CoreError::InvalidTarget {
                company: target.company,
                url: target.url,
                reason: "company must not contain ':'".to_string(),
            }
            .into());
        }

        let mut targets = self.load()?;
        if targets.contains(&target) {
            return Err(StoreError::Duplicate {
                company: target.company,
                url: target.url,
            });
        }

        targets.push(target);
        self.save(&targets)
    }

    /// Remove every target whose URL equals `key` or whose company equals
    /// `key` (case-insensitive). Returns the removed targets.
    pub fn remove(&self, key: &str) -> Result<Vec<Target>> {
        let key = key.trim();
        let company_key = key.to_lowercase();
        let (removed, kept): (Vec<_>, Vec<_>) = self
            .load()?
            .into_iter()
            .partition(|t| t.url == key || t.company.to_lowercase() == company_key);

        if removed.is_empty() {
            return Err(StoreError::NotFound(key.to_string()));
        }

        self.save(&kept)?;
        Ok(removed)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

/// Parse one `company:url` record.
///
/// A line that is itself a bare URL (`https://...`) takes the URL host as
/// its company, so lists written before companies were recorded still load.
pub fn parse_line(line: &str) -> Option<Target> {
    let line = line.trim();
    let (company, rest) = line.split_once(':')?;

    if rest.starts_with("//") {
        let host = url::Url::parse(line).ok()?.host_str()?.to_string();
        return Some(Target::new(host, line));
    }

    let company = company.trim();
    let url = rest.trim();
    if company.is_empty() || url.is_empty() {
        return None;
    }

    Some(Target::new(company, url))
}
