use p5mirror::tree::{locate_root, IdIndex};
use proptest::prelude::*;

use crate::integration::support::{folder, inline, project};

proptest! {
    #[test]
    fn index_resolves_every_id_to_its_last_record(ids in prop::collection::vec("[a-d]{1,2}", 0..24)) {
        let files: Vec<_> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| inline(id, &format!("f{}", i), ""))
            .collect();
        let index = IdIndex::from_records(&files);

        for id in &ids {
            let last = files.iter().rev().find(|f| &f.id == id).unwrap();
            prop_assert_eq!(&index.get(id).unwrap().name, &last.name);
        }
        prop_assert_eq!(index.len() + index.duplicate_ids().len(), files.len());
    }

    #[test]
    fn root_locator_returns_first_root_in_listing_order(
        names in prop::collection::vec(prop_oneof!["root", "src", "lib"], 0..12)
    ) {
        let files: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(i, name)| folder(&format!("id{}", i), name, &[]))
            .collect();
        let p = project("p", "p", files);

        let expected = names.iter().position(|n| n == "root").map(|i| format!("id{}", i));
        prop_assert_eq!(locate_root(&p).map(|r| r.id.clone()), expected);
    }
}
