//! Property tests for filename templates and assembly.

use kiln_config::{BuildMode, FilenameTemplate, HASH_LENGTH, LayoutOptions, ProjectLayout, assemble};
use proptest::prelude::*;

fn mode() -> impl Strategy<Value = BuildMode> {
    prop_oneof![Just(BuildMode::Development), Just(BuildMode::Production)]
}

proptest! {
    #[test]
    fn development_render_is_name_dot_ext(
        name in "[a-z][a-z0-9_-]{0,15}",
        ext in "[a-z0-9]{1,5}",
        content in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let template = FilenameTemplate::new(BuildMode::Development);
        prop_assert_eq!(template.render(&name, &ext, &content), format!("{name}.{ext}"));
    }

    #[test]
    fn production_render_embeds_stable_hash(
        name in "[a-z][a-z0-9_-]{0,15}",
        ext in "[a-z0-9]{1,5}",
        content in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let template = FilenameTemplate::new(BuildMode::Production);
        let first = template.render(&name, &ext, &content);
        let second = template.render(&name, &ext, &content);
        prop_assert_eq!(&first, &second);

        let prefix = format!("{name}.");
        let suffix = format!(".{ext}");
        prop_assert!(first.starts_with(&prefix));
        prop_assert!(first.ends_with(&suffix));
        let hash = &first[prefix.len()..first.len() - suffix.len()];
        prop_assert_eq!(hash.len(), HASH_LENGTH);
        prop_assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn assembly_is_a_pure_function_of_mode(mode in mode(), root in "/[a-z]{1,8}/[a-z]{1,8}") {
        let layout = ProjectLayout::resolve(&root, &LayoutOptions::default()).unwrap();
        let first = assemble(mode, &layout).unwrap();
        let second = assemble(mode, &layout).unwrap();
        prop_assert_eq!(first, second);
    }
}
