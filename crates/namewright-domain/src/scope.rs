//! Scope module - which filesystem entries an operation considers

/// Restricts validation and renaming to a kind of entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// Regular files only
    Files,

    /// Directories only
    Folders,

    /// Files and directories
    #[default]
    All,
}

impl Scope {
    /// Get the scope name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Files => "files",
            Scope::Folders => "folders",
            Scope::All => "all",
        }
    }

    /// Parse a scope from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "files" | "files-only" | "file" => Some(Scope::Files),
            "folders" | "folders-only" | "folder" | "dirs" => Some(Scope::Folders),
            "all" => Some(Scope::All),
            _ => None,
        }
    }

    /// Whether regular files fall inside this scope
    pub fn includes_files(&self) -> bool {
        matches!(self, Scope::Files | Scope::All)
    }

    /// Whether directories fall inside this scope
    pub fn includes_folders(&self) -> bool {
        matches!(self, Scope::Folders | Scope::All)
    }

    /// Whether an entry of the given kind is in scope
    pub fn includes(&self, is_dir: bool) -> bool {
        if is_dir {
            self.includes_folders()
        } else {
            self.includes_files()
        }
    }

    /// Whether renames must run children-before-parents
    ///
    /// Any scope that renames folders has to walk bottom-up, otherwise a
    /// renamed folder invalidates the paths of its unvisited descendants.
    pub fn requires_bottom_up(&self) -> bool {
        self.includes_folders()
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid scope: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_parse() {
        assert_eq!(Scope::parse("files"), Some(Scope::Files));
        assert_eq!(Scope::parse("Folders-Only"), Some(Scope::Folders));
        assert_eq!(Scope::parse("ALL"), Some(Scope::All));
        assert_eq!(Scope::parse("everything"), None);
        assert!("nope".parse::<Scope>().is_err());
    }

    #[test]
    fn test_scope_membership() {
        assert!(Scope::Files.includes(false));
        assert!(!Scope::Files.includes(true));
        assert!(Scope::Folders.includes(true));
        assert!(!Scope::Folders.includes(false));
        assert!(Scope::All.includes(true) && Scope::All.includes(false));
    }

    #[test]
    fn test_walk_direction() {
        assert!(!Scope::Files.requires_bottom_up());
        assert!(Scope::Folders.requires_bottom_up());
        assert!(Scope::All.requires_bottom_up());
    }
}
