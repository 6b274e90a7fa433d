//! Configuration management for sort operations

/// Main configuration structure for sort operations.
///
/// Built once at startup and shared by reference; nothing mutates it while
/// rows are being extracted, compared or written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortConfig {
    /// Field to sort by (1-based); 0 compares every field of the line in turn
    pub key_column: usize,
    /// Compare keys that parse as integers by value
    pub numeric: bool,
    /// Compare keys like `2K` or `1.5M` by value
    pub human_numeric: bool,
    /// Compare keys that are English month names in calendar order
    pub month: bool,
    /// Reverse the sorted sequence end to end
    pub reverse: bool,
    /// Drop later lines whose text repeats an earlier one
    pub unique: bool,
    /// Trim surrounding whitespace before splitting into fields
    pub ignore_blanks: bool,
    /// Leave the file alone if it is already sorted
    pub check: bool,
}

impl SortConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort by the given 1-based field, or the whole line for 0
    pub fn with_key_column(mut self, column: usize) -> Self {
        self.key_column = column;
        self
    }

    pub fn with_numeric(mut self, numeric: bool) -> Self {
        self.numeric = numeric;
        self
    }

    pub fn with_human_numeric(mut self, human_numeric: bool) -> Self {
        self.human_numeric = human_numeric;
        self
    }

    pub fn with_month(mut self, month: bool) -> Self {
        self.month = month;
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn with_ignore_blanks(mut self, ignore_blanks: bool) -> Self {
        self.ignore_blanks = ignore_blanks;
        self
    }

    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    /// Whether every field of the line takes part in comparison
    pub fn whole_line(&self) -> bool {
        self.key_column == 0
    }

    /// Short description of the active key mode, used in debug logging
    pub fn describe_keys(&self) -> String {
        let mut rules = Vec::new();
        if self.numeric {
            rules.push("numeric");
        }
        if self.human_numeric {
            rules.push("human-numeric");
        }
        if self.month {
            rules.push("month");
        }
        rules.push("lexicographic");

        let selector = if self.whole_line() {
            "all fields".to_string()
        } else {
            format!("field {}", self.key_column)
        };
        format!("{selector} ({})", rules.join(" > "))
    }
}

/// Builder pattern for creating configurations
pub struct SortConfigBuilder {
    config: SortConfig,
}

impl SortConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self {
            config: SortConfig::default(),
        }
    }

    /// Set the key column
    pub fn key_column(mut self, column: usize) -> Self {
        self.config.key_column = column;
        self
    }

    /// Enable integer comparison
    pub fn numeric(mut self) -> Self {
        self.config.numeric = true;
        self
    }

    /// Enable suffix-aware numeric comparison
    pub fn human_numeric(mut self) -> Self {
        self.config.human_numeric = true;
        self
    }

    /// Enable month-name comparison
    pub fn month(mut self) -> Self {
        self.config.month = true;
        self
    }

    /// Enable reverse output
    pub fn reverse(mut self) -> Self {
        self.config.reverse = true;
        self
    }

    /// Enable unique output
    pub fn unique(mut self) -> Self {
        self.config.unique = true;
        self
    }

    /// Trim surrounding blanks before key extraction
    pub fn ignore_blanks(mut self) -> Self {
        self.config.ignore_blanks = true;
        self
    }

    /// Enable check mode
    pub fn check(mut self) -> Self {
        self.config.check = true;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> SortConfig {
        self.config
    }
}

impl Default for SortConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
