use super::*;

fn institution(id: &str, name: Option<&str>, image: Option<&str>) -> Institution {
    Institution {
        id: InstitutionId::from(id),
        institution_name: name.map(str::to_string),
        url_image: image.map(str::to_string),
    }
}

fn ready_panel() -> InstitutionPanel {
    InstitutionPanel::from_institutions(&[
        institution("a", Some("Food Bank"), Some("https://img/a.png")),
        institution("b", Some("Animal Shelter"), None),
        institution("c", None, None),
    ])
}

#[test]
fn renders_one_card_per_institution_with_fallbacks() {
    let panel = ready_panel();
    let cards = panel.cards();

    assert_eq!(cards.len(), 3);
    assert_eq!(panel.status_message(), None);
    assert_eq!(cards[0].display_name, "Food Bank");
    assert_eq!(cards[0].image_url, "https://img/a.png");
    assert_eq!(cards[0].image_alt, "Logo of Food Bank");
    assert_eq!(cards[1].image_url, PLACEHOLDER_IMAGE_URL);
    assert_eq!(cards[2].display_name, "Name not found (ID: c)");
    assert!(cards.iter().all(|card| !card.selected));
}

#[test]
fn blank_names_and_images_use_fallbacks() {
    let card = InstitutionCard::from_institution(&institution("z", Some(""), Some("")));

    assert_eq!(card.display_name, "Name not found (ID: z)");
    assert_eq!(card.image_url, PLACEHOLDER_IMAGE_URL);
}

#[test]
fn selection_is_exclusive() {
    let mut panel = ready_panel();

    for index in [0, 2, 1] {
        let id = panel.select_index(index).expect("select").clone();
        assert_eq!(id, panel.cards()[index].id);
        assert_eq!(panel.selected_id(), Some(&id));
        let selected: Vec<usize> = panel
            .cards()
            .iter()
            .enumerate()
            .filter(|(_, card)| card.selected)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(selected, vec![index]);
    }
}

#[test]
fn unknown_selection_keeps_current_choice() {
    let mut panel = ready_panel();
    panel.select_index(1).expect("select");

    assert_eq!(panel.select_index(3), Err(SelectionError::UnknownIndex(3)));
    assert_eq!(
        panel.select_id(&InstitutionId::from("missing")),
        Err(SelectionError::UnknownId(InstitutionId::from("missing")))
    );
    assert_eq!(panel.selected_id(), Some(&InstitutionId::from("b")));

    panel.select_id(&InstitutionId::from("c")).expect("select by id");
    assert_eq!(panel.selected_id(), Some(&InstitutionId::from("c")));
}

#[test]
fn clear_selection_deselects_everything() {
    let mut panel = ready_panel();
    panel.select_index(0).expect("select");

    panel.clear_selection();

    assert_eq!(panel.selected_id(), None);
    assert_eq!(panel.cards().len(), 3);
}

#[test]
fn empty_and_unavailable_states_are_distinct() {
    let empty = InstitutionPanel::from_institutions(&[]);

    assert_eq!(empty, InstitutionPanel::Empty);
    assert!(empty.cards().is_empty());
    assert_eq!(empty.status_message(), Some("No institutions found."));
    assert!(InstitutionPanel::Unavailable.cards().is_empty());
    assert_ne!(
        InstitutionPanel::Unavailable.status_message(),
        empty.status_message()
    );

    let mut unavailable = InstitutionPanel::Unavailable;
    assert_eq!(
        unavailable.select_index(0),
        Err(SelectionError::UnknownIndex(0))
    );
}
