//! Derivation of the five target files for a module

use crate::config::ScaffoldLayout;
use crate::scaffold::ModuleName;
use crate::templates::{self, TemplateKind};
use std::path::PathBuf;

/// One file to be generated: where it goes and what it contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub kind: TemplateKind,
    pub path: PathBuf,
    pub content: String,
}

/// Build the file list for `name`, in write order
pub fn plan_module(layout: &ScaffoldLayout, name: &ModuleName) -> Vec<FileSpec> {
    TemplateKind::ALL
        .iter()
        .map(|&kind| {
            let path = match kind.view_suffix() {
                Some(suffix) => layout.component_path(name, suffix),
                None => layout.slice_path(name),
            };
            FileSpec {
                kind,
                path,
                content: templates::render(kind, name.as_str()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_has_five_files_in_order() {
        let name = ModuleName::parse("Users").unwrap();
        let plan = plan_module(&ScaffoldLayout::default(), &name);

        let paths: Vec<_> = plan.iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("src/components/Users/UsersList.tsx"),
                PathBuf::from("src/components/Users/UsersForm.tsx"),
                PathBuf::from("src/components/Users/UsersDetails.tsx"),
                PathBuf::from("src/components/Users/UsersEdit.tsx"),
                PathBuf::from("src/redux/usersSlice.ts"),
            ]
        );
    }

    #[test]
    fn test_view_identifiers_match_file_stems() {
        let name = ModuleName::parse("Users").unwrap();
        let plan = plan_module(&ScaffoldLayout::default(), &name);

        for spec in plan.iter().filter(|f| f.kind.is_view()) {
            let stem = spec.path.file_stem().unwrap().to_str().unwrap();
            assert!(spec.content.contains(&format!("<h2>{}</h2>", stem)));
            assert!(spec.content.contains(&format!("export default {};", stem)));
        }
    }

    #[test]
    fn test_slice_file_matches_slice_identifier() {
        let name = ModuleName::parse("Users").unwrap();
        let plan = plan_module(&ScaffoldLayout::default(), &name);
        let slice = plan.last().unwrap();

        assert_eq!(slice.kind, TemplateKind::Slice);
        let stem = slice.path.file_stem().unwrap().to_str().unwrap();
        assert_eq!(stem, "usersSlice");
        assert!(slice.content.contains(&format!("const {} = createSlice", stem)));
    }
}
