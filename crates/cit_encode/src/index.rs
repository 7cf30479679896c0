//! Index builder: walks the ordered groups once and builds the lookup tables
//! every later pass needs. Validation of "duplicate option" / "empty group"
//! already happened in `cit_io::ir` during IR parsing; this pass assumes a
//! structurally valid `&[Group]` and only builds indices over it.

use std::collections::HashMap;

use cit_core::Group;

/// Per-option metadata pulled out of the IR for quick lookup during the
/// group/condition passes.
#[derive(Clone, Debug, Default)]
pub struct OptionMeta {
    pub single: bool,
    pub error: bool,
    pub condition: Option<String>,
    pub property: Option<String>,
}

/// Lookup tables built once from the ordered group list and shared read-only
/// by every subsequent pass.
pub struct GroupIndex<'a> {
    groups: &'a [Group],
    /// option name -> index into `groups`.
    option_to_group: HashMap<&'a str, usize>,
    /// property name -> asserting option names, in first-discovery order.
    property_to_options: Vec<(String, Vec<&'a str>)>,
    /// option name -> metadata.
    option_meta: HashMap<&'a str, OptionMeta>,
}

impl<'a> GroupIndex<'a> {
    pub fn build(groups: &'a [Group]) -> Self {
        let mut option_to_group = HashMap::new();
        let mut property_to_options: Vec<(String, Vec<&'a str>)> = Vec::new();
        let mut property_position: HashMap<&str, usize> = HashMap::new();
        let mut option_meta = HashMap::new();

        for (gi, g) in groups.iter().enumerate() {
            for opt in &g.options {
                option_to_group.insert(opt.name.as_str(), gi);
                option_meta.insert(
                    opt.name.as_str(),
                    OptionMeta {
                        single: opt.single,
                        error: opt.error,
                        condition: opt.condition.clone(),
                        property: opt.property.clone(),
                    },
                );
                if let Some(prop) = &opt.property {
                    match property_position.get(prop.as_str()) {
                        Some(&idx) => property_to_options[idx].1.push(opt.name.as_str()),
                        None => {
                            property_position.insert(prop.as_str(), property_to_options.len());
                            property_to_options.push((prop.clone(), vec![opt.name.as_str()]));
                        }
                    }
                }
            }
        }

        GroupIndex {
            groups,
            option_to_group,
            property_to_options,
            option_meta,
        }
    }

    pub fn groups(&self) -> &'a [Group] {
        self.groups
    }

    pub fn group_of(&self, option_name: &str) -> Option<&'a Group> {
        self.option_to_group.get(option_name).map(|&i| &self.groups[i])
    }

    pub fn meta_of(&self, option_name: &str) -> Option<&OptionMeta> {
        self.option_meta.get(option_name)
    }

    /// Properties in first-discovery order, each with its asserting options
    /// in first-discovery order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &[&'a str])> {
        self.property_to_options.iter().map(|(p, os)| (p.as_str(), os.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cit_core::{GroupCategory, Option as CitOption};

    fn group(name: &str, opts: Vec<CitOption>) -> Group {
        let mut g = Group::new(name, GroupCategory::Parameter);
        g.options = opts;
        g
    }

    #[test]
    fn properties_are_ordered_by_first_discovery() {
        let groups = vec![
            group(
                "A",
                vec![
                    CitOption::new("a1").with_property("P"),
                    CitOption::new("a2").with_property("Q"),
                ],
            ),
            group("B", vec![CitOption::new("b1").with_property("P")]),
        ];
        let idx = GroupIndex::build(&groups);
        let props: Vec<&str> = idx.properties().map(|(p, _)| p).collect();
        assert_eq!(props, vec!["P", "Q"]);
        let (_, p_options) = idx.properties().next().unwrap();
        assert_eq!(p_options, ["a1", "b1"]);
    }

    #[test]
    fn group_of_resolves_containing_group() {
        let groups = vec![group("A", vec![CitOption::new("a1")])];
        let idx = GroupIndex::build(&groups);
        assert_eq!(idx.group_of("a1").unwrap().name, "A");
    }
}
