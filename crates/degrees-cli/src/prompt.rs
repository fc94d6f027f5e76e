//! Line-oriented prompts.
//!
//! Prompts read from any `BufRead` and write to any `Write`, so `--json`
//! runs can keep questions on stderr and stdout free for the result.

use colored::Colorize;
use degrees_core::PersonId;
use degrees_graph::{NameResolver, Resolution};
use std::io::{self, BufRead, Write};

/// A question/answer channel with the user.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `label` and reads one trimmed line.
    pub fn ask(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Resolves a name, asking the user to pick when several people share it.
    ///
    /// Returns `Ok(None)` when nobody has that name or the chosen id is not
    /// one of the candidates.
    pub fn pick_person(
        &mut self,
        resolver: &NameResolver<'_>,
        name: &str,
    ) -> io::Result<Option<PersonId>> {
        match resolver.resolve(name) {
            Resolution::NotFound => Ok(None),
            Resolution::Unique(id) => Ok(Some(id)),
            Resolution::Ambiguous(candidates) => {
                writeln!(self.output, "Which '{}'?", name.cyan())?;
                for candidate in &candidates {
                    let birth = candidate
                        .birth
                        .map(|year| year.to_string())
                        .unwrap_or_default();
                    writeln!(
                        self.output,
                        "ID: {}, Name: {}, Birth: {}",
                        candidate.id, candidate.name, birth
                    )?;
                }

                let chosen = self.ask("Intended Person ID: ")?;
                Ok(resolver.choose(name, &chosen).ok())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use degrees_graph::EntityStore;
    use std::io::Cursor;

    fn store() -> EntityStore {
        let mut store = EntityStore::new();
        store.add_person("102", "Kevin Bacon", Some(1958));
        store.add_person("158", "Tom Hanks", Some(1956));
        store.add_person("2001", "Tom Hanks", None);
        store
    }

    #[test]
    fn test_ambiguous_name_lists_candidates_on_output() {
        let store = store();
        let resolver = NameResolver::new(&store);
        let mut output = Vec::new();

        let chosen = Prompt::new(Cursor::new("2001\n"), &mut output)
            .pick_person(&resolver, "tom hanks")
            .unwrap();

        assert_eq!(chosen, Some(PersonId::new("2001")));
        let written = String::from_utf8(output).unwrap();
        assert!(written.contains("ID: 158, Name: Tom Hanks, Birth: 1956"));
        assert!(written.contains("ID: 2001, Name: Tom Hanks, Birth: \n"));
        assert!(written.ends_with("Intended Person ID: "));
    }

    #[test]
    fn test_choice_outside_candidates_is_rejected() {
        let store = store();
        let resolver = NameResolver::new(&store);
        let mut output = Vec::new();

        let chosen = Prompt::new(Cursor::new("102\n"), &mut output)
            .pick_person(&resolver, "Tom Hanks")
            .unwrap();

        assert_eq!(chosen, None);
    }

    #[test]
    fn test_unique_name_writes_nothing() {
        let store = store();
        let resolver = NameResolver::new(&store);
        let mut output = Vec::new();

        let chosen = Prompt::new(Cursor::new(""), &mut output)
            .pick_person(&resolver, "KEVIN BACON")
            .unwrap();

        assert_eq!(chosen, Some(PersonId::new("102")));
        assert!(output.is_empty());
    }

    #[test]
    fn test_ask_trims_answer() {
        let mut output = Vec::new();
        let answer = Prompt::new(Cursor::new("  Kevin Bacon \n"), &mut output)
            .ask("Name: ")
            .unwrap();

        assert_eq!(answer, "Kevin Bacon");
        assert_eq!(output, b"Name: ");
    }
}
