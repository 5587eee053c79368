/// How often a one-character name is repeated to form its branch.
pub const SINGLE_CHAR_REPEAT: usize = 10;

/// Single words at least this long never shrink below two characters.
pub const LONG_WORD_LEN: usize = 7;

/// Ordered keybinding candidates for one entity, most abbreviated first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    /// Branches indexed by stage. The last one is always the full name.
    pub branches: Vec<String>,
    /// Shortest binding the shortener may settle on for this entity.
    pub min_len: usize,
}

impl Candidates {
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub fn stage(&self, stage: usize) -> Option<&str> {
        self.branches.get(stage).map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.branches.last().map(String::as_str)
    }

    pub fn stage_count(&self) -> usize {
        self.branches.len()
    }
}

/// Builds the branch list for a normalized word list.
pub fn generate(words: &[String]) -> Candidates {
    match words {
        [] => Candidates::default(),
        [word] => single_word(word),
        [first, rest @ ..] => multi_word(first, rest),
    }
}

fn single_word(word: &str) -> Candidates {
    let len = word.len();
    if len == 1 {
        return Candidates {
            branches: vec![word.repeat(SINGLE_CHAR_REPEAT)],
            min_len: 1,
        };
    }
    // long words are trimmed by the shortener, not pre-abbreviated here
    let min_len = if len >= LONG_WORD_LEN { 2 } else { 1 };
    Candidates {
        branches: vec![word.to_string()],
        min_len,
    }
}

// Expands the first word one letter at a time; middle words contribute their
// initial and the last word is spelled out. The final stage is every word in full.
fn multi_word(first: &str, rest: &[String]) -> Candidates {
    let (last, middle) = match rest.split_last() {
        Some(parts) => parts,
        None => return single_word(first),
    };
    let initials: String = middle.iter().filter_map(|w| w.chars().next()).collect();

    let mut branches: Vec<String> = Vec::with_capacity(first.len() + 1);
    for i in 1..=first.len() {
        push_distinct(&mut branches, format!("{}{initials}{last}", &first[..i]));
    }
    let full: String = std::iter::once(first)
        .chain(rest.iter().map(String::as_str))
        .collect();
    push_distinct(&mut branches, full);

    Candidates { branches, min_len: 1 }
}

fn push_distinct(branches: &mut Vec<String>, branch: String) {
    if branches.last() != Some(&branch) {
        branches.push(branch);
    }
}
