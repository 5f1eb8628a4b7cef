#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

#[cfg(test)]
mod element_tests {
    use markup_tree::{kinds, Attribute, Collection, Element, TreeError};

    // Ordering Tests
    #[test]
    fn test_attributes_sorted_by_kind() -> Result<(), Box<dyn std::error::Error>> {
        let mut element = Element::new(1, "div");
        element
            .add_attribute(Attribute::new(5, "title", "t"))?
            .add_attribute(Attribute::class("c"))?
            .add_attribute(Attribute::new(3, "lang", "en"))?
            .add_attribute(Attribute::id("i"))?;

        let order: Vec<u64> = element
            .get_all_attributes()
            .iter()
            .map(Attribute::kind)
            .collect();
        assert_eq!(order, vec![kinds::ID, kinds::CLASS, 3, 5]);
        Ok(())
    }

    #[test]
    fn test_children_sorted_by_id() -> Result<(), Box<dyn std::error::Error>> {
        let mut element = Element::new(0, "ul");
        element
            .add_child(Element::new(30, "li"))?
            .add_child(Element::new(10, "li"))?
            .add_child(Element::new(20, "li"))?;

        let ids: Vec<u64> = element.get_children().iter().map(Element::id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
        Ok(())
    }

    // Duplicate Key Tests
    #[test]
    fn test_duplicate_child_rejected() {
        let mut element = Element::new(27, "blah");
        element.add_child(Element::new(28, "first")).unwrap();

        let err = element.add_child(Element::new(28, "second")).unwrap_err();
        assert!(matches!(err, TreeError::DuplicateKey { .. }));
        assert_eq!(err.collection(), Collection::Children);
        assert_eq!(element.child_count(), 1);
        assert_eq!(element.get_child(28).unwrap().get_name(), "first");
    }

    #[test]
    fn test_duplicate_attribute_in_constructor() {
        let attributes = [Attribute::class("a"), Attribute::class("b")];
        let result = Element::with_contents(1, "div", attributes, []);
        assert!(matches!(
            result,
            Err(TreeError::DuplicateKey {
                collection: Collection::Attributes,
                key: kinds::CLASS
            })
        ));
    }

    #[test]
    fn test_child_ids_may_reuse_well_known_values() -> Result<(), Box<dyn std::error::Error>> {
        let mut element = Element::new(kinds::BODY, "section");
        element.add_child(Element::new(kinds::HTML, "span"))?;
        assert_eq!(element.get_child(kinds::HTML)?.get_name(), "span");
        Ok(())
    }

    // Lookup Tests
    #[test]
    fn test_missing_child_not_found() {
        let element = Element::new(1, "div");
        assert_eq!(
            element.get_child(99).unwrap_err(),
            TreeError::NotFound {
                collection: Collection::Children,
                key: 99
            }
        );
        assert_eq!(element.child_count(), 0);
    }

    #[test]
    fn test_missing_attribute_not_found() {
        let mut element = Element::new(1, "div");
        element.add_attribute(Attribute::id("x")).unwrap();

        let err = element.get_attribute(kinds::CLASS).unwrap_err();
        assert!(matches!(err, TreeError::NotFound { .. }));
        assert_eq!(element.attribute_count(), 1);
    }

    #[test]
    fn test_snapshots_are_detached() -> Result<(), Box<dyn std::error::Error>> {
        let mut element = Element::new(1, "div");
        element.add_child(Element::new(2, "span"))?;

        let mut children = element.get_children();
        children[0].add_child(Element::new(3, "b"))?;
        children.clear();

        assert_eq!(element.child_count(), 1);
        assert!(!element.get_child(2)?.has_children());
        Ok(())
    }

    #[test]
    fn test_clone_copies_subtree() -> Result<(), Box<dyn std::error::Error>> {
        let mut original = Element::new(1, "div");
        original.add_child(Element::new(2, "span"))?;

        let mut copy = original.clone();
        copy.add_child(Element::new(3, "p"))?;

        assert_eq!(original.child_count(), 1);
        assert_eq!(copy.child_count(), 2);
        Ok(())
    }
}
