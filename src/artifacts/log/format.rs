use crate::artifacts::objects::change::Change;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::fingerprint::Fingerprint;
use derive_new::new;

/// Renders a commit with its change list and tracked files
///
/// ```text
/// 2928c5 [master]: c1
///     + f1
///     / notes.txt [       512 ->        530]
///
///     Tracked files (2):
///     [       633] f1
///     [       530] notes.txt
/// ```
///
/// Modification lines show the fingerprint recorded by the first parent.
#[derive(new)]
pub struct CommitFormatter<'c> {
    commit: &'c Commit,
    parent: Option<&'c Commit>,
}

impl CommitFormatter<'_> {
    fn previous_fingerprint(&self, file_name: &str) -> Fingerprint {
        self.parent
            .and_then(|parent| parent.file(file_name))
            .map(|file| file.fingerprint)
            .unwrap_or(Fingerprint::from_raw(0))
    }
}

impl std::fmt::Display for CommitFormatter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} [{}]: {}",
            self.commit.id(),
            self.commit.branch(),
            self.commit.message()
        )?;

        for file in self.commit.files() {
            let Some(symbol) = file.change.symbol() else {
                continue;
            };

            if file.change == Change::Modified {
                writeln!(
                    f,
                    "    {} {} [{:>10} -> {:>10}]",
                    symbol,
                    file.name,
                    self.previous_fingerprint(&file.name),
                    file.fingerprint
                )?;
            } else {
                writeln!(f, "    {} {}", symbol, file.name)?;
            }
        }

        writeln!(
            f,
            "\n    Tracked files ({}):",
            self.commit.retained_files().count()
        )?;
        for file in self.commit.retained_files() {
            writeln!(f, "    [{:>10}] {}", file.fingerprint, file.name)?;
        }

        Ok(())
    }
}
