use crate::engine::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleLine {
    pub role: Role,
    pub count: usize,
    pub target: Option<usize>,
}

/// Display model of one build, shared by the terminal viewer and the plain
/// text printer.
#[derive(Clone, Debug)]
pub struct DeckView {
    pub title: String,
    pub spells: Vec<(String, usize)>,
    pub lands: Vec<(String, usize)>,
    pub roles: Vec<RoleLine>,
    pub message: String,
}

impl DeckView {
    pub fn new(build: &DeckBuild, spec: &DeckSpec) -> Self {
        let land_names: Vec<&str> = build.diagnostics.nonbasic_lands.iter()
            .map(String::as_str)
            .chain(build.diagnostics.basic_lands.keys().map(|color| color.basic_land()))
            .collect();

        let (lands, spells): (Vec<_>, Vec<_>) = build.decklist.main_deck.iter()
            .map(|(name, qty)| (name.clone(), *qty))
            .partition(|(name, _)| land_names.contains(&name.as_str()));

        let roles = Role::ALL.iter()
            .map(|role| RoleLine {
                role: *role,
                count: build.diagnostics.role_counts.get(role).copied().unwrap_or(0),
                target: spec.target_for(*role),
            })
            .filter(|line| line.count > 0 || line.target.is_some())
            .collect();

        Self {
            title: format!(
                "{} · {} · {}/{} cards",
                spec.format,
                spec.color_identity,
                build.decklist.total_cards(),
                build.diagnostics.expected_size,
            ),
            spells,
            lands,
            roles,
            message: build.decklist.message.clone(),
        }
    }

    pub fn deck_lines(&self) -> Vec<String> {
        let section = |cards: &[(String, usize)]| -> Vec<String> {
            cards.iter().map(|(name, qty)| format!("{qty} {name}")).collect()
        };
        let mut lines = section(&self.spells);
        if !self.spells.is_empty() && !self.lands.is_empty() {
            lines.push(String::new());
        }
        lines.extend(section(&self.lands));
        lines
    }

    pub fn role_lines(&self) -> Vec<String> {
        self.roles.iter()
            .map(|line| match line.target {
                Some(target) => format!("{:<12} {:>3}/{}", line.role, line.count, target),
                None => format!("{:<12} {:>3}", line.role, line.count),
            })
            .collect()
    }

    /// `<qty> <name>` lines with `//` comments, the way deck sites take
    /// imports.
    pub fn render_plain(&self) -> String {
        let mut out = vec![format!("// {}", self.title)];
        out.extend(self.deck_lines());
        out.push(String::new());
        out.extend(self.role_lines().into_iter().map(|line| format!("// {line}")));
        out.push(format!("// {}", self.message));
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample_build() -> DeckBuild {
        DeckBuild {
            decklist: Decklist {
                main_deck: BTreeMap::from([
                    ("Knight".to_string(), 3),
                    ("Plains".to_string(), 2),
                    ("Castle".to_string(), 1),
                ]),
                sideboard: BTreeMap::new(),
                message: "Deck built successfully with 6 cards!".to_string(),
            },
            diagnostics: BuildDiagnostics {
                expected_size: 60,
                nonland_target: 57,
                nonland_chosen: 3,
                nonbasic_lands: vec!["Castle".to_string()],
                basic_lands: BTreeMap::from([(ManaType::White, 2)]),
                role_counts: BTreeMap::from([(Role::Threat, 3), (Role::Land, 1)]),
            },
        }
    }

    #[test]
    fn lands_are_split_from_spells() {
        let spec = DeckSpec { format: Format::new("modern"), ..DeckSpec::default() };
        let view = DeckView::new(&sample_build(), &spec);
        assert_eq!(view.spells, vec![("Knight".to_string(), 3)]);
        assert_eq!(view.lands, vec![("Castle".to_string(), 1), ("Plains".to_string(), 2)]);
        assert_eq!(view.deck_lines(), vec!["3 Knight", "", "1 Castle", "2 Plains"]);
    }

    #[test]
    fn roles_show_targets_when_they_have_one() {
        let spec = DeckSpec { format: Format::new("modern"), ..DeckSpec::default() };
        let view = DeckView::new(&sample_build(), &spec);
        let threat = view.roles.iter().find(|line| line.role == Role::Threat).unwrap();
        assert_eq!((threat.count, threat.target), (3, Some(25)));
        let land = view.roles.iter().find(|line| line.role == Role::Land).unwrap();
        assert_eq!(land.target, None);
        assert!(view.roles.iter().all(|line| line.role != Role::Tutor));
    }

    #[test]
    fn plain_output_is_importable() {
        let spec = DeckSpec { format: Format::new("modern"), ..DeckSpec::default() };
        let text = DeckView::new(&sample_build(), &spec).render_plain();
        assert!(text.starts_with("// modern · WB · 6/60 cards\n3 Knight\n"));
        assert!(text.ends_with("// Deck built successfully with 6 cards!"));
        assert!(text.lines().all(|line| line.is_empty() || line.starts_with("//") || line.chars().next().unwrap().is_ascii_digit()));
    }
}
