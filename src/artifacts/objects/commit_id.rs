//! Commit identifier
//!
//! Commit ids are six lowercase hex digits derived from the commit message and
//! the list of changed files. The derivation is deterministic but weak: two
//! different commits can produce the same id.
//!
//! ## Algorithm
//!
//! 1. `id = (sum of message bytes) mod 1000`
//! 2. files are visited in case-insensitive name order over signed bytes (a
//!    name that is a case-insensitive prefix of another sorts first)
//! 3. for each changed file, add the change weight, then for each byte `k` of
//!    the name: `id = ((id * (k mod 37)) mod 15485863) + 1`
//! 4. render as `%06x`

use crate::artifacts::objects::change::Change;
use crate::artifacts::objects::commit::FrozenFile;
use std::cmp::Ordering;

/// Length of a rendered commit id
pub const COMMIT_ID_LENGTH: usize = 6;

const MESSAGE_MODULUS: u64 = 1000;
const NAME_BYTE_MODULUS: u64 = 37;
const ROLLING_MODULUS: u64 = 15_485_863;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    pub fn try_parse(id: &str) -> Option<Self> {
        if id.len() == COMMIT_ID_LENGTH
            && id
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            Some(Self(id.to_string()))
        } else {
            None
        }
    }

    /// Derive the id of a commit; `files` must already be in commit order
    pub fn derive(message: &str, files: &[FrozenFile]) -> Self {
        let mut id = message.bytes().map(u64::from).sum::<u64>() % MESSAGE_MODULUS;

        for file in files {
            let Some(weight) = file.change.id_weight() else {
                continue;
            };

            id += weight;
            for k in file.name.bytes() {
                id = ((id * (u64::from(k) % NAME_BYTE_MODULUS)) % ROLLING_MODULUS) + 1;
            }
        }

        Self(format!("{id:06x}"))
    }
}

/// Case-insensitive (ASCII) ordering used to sort a commit's files
///
/// Bytes compare as signed values, so names holding bytes >= 0x80 sort ahead
/// of plain ASCII names.
pub fn compare_file_names(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(signed_lowercase)
        .cmp(b.bytes().map(signed_lowercase))
}

fn signed_lowercase(byte: u8) -> i8 {
    byte.to_ascii_lowercase() as i8
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::fingerprint::Fingerprint;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn frozen(name: &str, change: Change) -> FrozenFile {
        FrozenFile::new(name.to_string(), Fingerprint::from_raw(0), change)
    }

    #[test]
    fn first_commit_with_single_added_file() {
        let id = CommitId::derive("first", &[frozen("a.txt", Change::Added)]);
        assert_eq!(id.as_ref(), "443094");
    }

    #[test]
    fn message_only_id_is_zero_padded() {
        // "hello" sums to 532 = 0x214
        assert_eq!(CommitId::derive("hello", &[]).as_ref(), "000214");
    }

    #[test]
    fn unchanged_files_do_not_contribute() {
        let with_unchanged = CommitId::derive(
            "c2",
            &[frozen("f1", Change::Unchanged), frozen("f2", Change::Added)],
        );
        let without = CommitId::derive("c2", &[frozen("f2", Change::Added)]);

        assert_eq!(with_unchanged, without);
        assert_eq!(with_unchanged.as_ref(), "ca2006");
    }

    #[test]
    fn merge_message_fixture() {
        let id = CommitId::derive(
            "Merged branch feature",
            &[frozen("f1", Change::Unchanged), frozen("f2", Change::Added)],
        );
        assert_eq!(id.as_ref(), "c976d2");
    }

    #[test]
    fn file_names_sort_case_insensitively_with_prefixes_first() {
        let mut names = vec!["b.txt", "A.txt", "a", "B", "ab"];
        names.sort_by(|a, b| compare_file_names(a, b));
        assert_eq!(names, vec!["a", "A.txt", "ab", "B", "b.txt"]);
    }

    #[test]
    fn non_ascii_names_sort_before_ascii_ones() {
        let mut names = vec!["b.txt", "\u{e9}t\u{e9}.txt", "A.txt"];
        names.sort_by(|a, b| compare_file_names(a, b));
        assert_eq!(names, vec!["\u{e9}t\u{e9}.txt", "A.txt", "b.txt"]);
    }

    #[test]
    fn parse_rejects_malformed_ids() {
        assert!(CommitId::try_parse("443094").is_some());
        assert!(CommitId::try_parse("44309").is_none());
        assert!(CommitId::try_parse("44309G").is_none());
        assert!(CommitId::try_parse("44309A").is_none());
    }

    proptest! {
        #[test]
        fn derived_id_is_always_six_hex_digits(
            message in ".{0,64}",
            names in proptest::collection::vec("[a-zA-Z0-9_./-]{1,16}", 0..8)
        ) {
            let files = names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let change = match i % 4 {
                        0 => Change::Added,
                        1 => Change::Modified,
                        2 => Change::Deleted,
                        _ => Change::Unchanged,
                    };
                    frozen(name, change)
                })
                .collect::<Vec<_>>();

            let id = CommitId::derive(&message, &files);
            prop_assert_eq!(id.as_ref().len(), COMMIT_ID_LENGTH);
            prop_assert!(CommitId::try_parse(id.as_ref()).is_some());
        }
    }
}
