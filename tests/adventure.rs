//! End-to-end runs of the bundled building with scripted input.
//!
//! Every test feeds a whole session through `Console` over an in-memory cursor and
//! inspects both the final controller state and the transcript.

use std::io::Cursor;

use floorwalk::engine::Console;
use floorwalk::{Adventure, load_bundled_world};

// ── Helpers ────────────────────────────────────────────────────────────

fn play(script: &str) -> (Adventure, String) {
    let mut adventure = Adventure::new(load_bundled_world().unwrap());
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    adventure.play(&mut console).unwrap();
    let transcript = String::from_utf8(console.into_output()).unwrap();
    (adventure, transcript)
}

/// Runs commands one by one without the banner, for state checks between steps.
fn stepper() -> (Adventure, Console<Cursor<String>, Vec<u8>>) {
    let adventure = Adventure::new(load_bundled_world().unwrap());
    let console = Console::new(Cursor::new(String::new()), Vec::new());
    (adventure, console)
}

// ── Navigation ─────────────────────────────────────────────────────────

#[test]
fn starts_in_the_cellar_and_climbs() {
    let (adv, transcript) = play("go up\ngo up\n");
    assert_eq!(adv.current_floor().name, "first floor");
    assert!(transcript.contains("ZDD TEXT ADVENTURE"));
    assert!(transcript.contains("FIRST FLOOR"));
    assert!(!adv.is_active(), "end of input stops the game");
}

#[test]
fn unknown_direction_keeps_the_floor() {
    let (mut adv, mut console) = stepper();
    for dir in ["down", "sideways", "north"] {
        adv.step(&format!("go {dir}"), &mut console).unwrap();
        assert_eq!(adv.current_floor().name, "cellar");
    }
    adv.step("go", &mut console).unwrap();
    assert_eq!(adv.current_floor().name, "cellar");

    let transcript = String::from_utf8(console.into_output()).unwrap();
    assert_eq!(transcript.matches("You can't go in that direction!").count(), 3);
    assert!(transcript.contains("Please specify a direction"));
}

#[test]
fn direction_case_does_not_matter() {
    let (mut adv, mut console) = stepper();
    adv.step("GO UP", &mut console).unwrap();
    assert_eq!(adv.current_floor().name, "ground floor");
}

#[test]
fn changing_floor_clears_the_current_room() {
    let (mut adv, mut console) = stepper();
    adv.step("enter archive", &mut console).unwrap();
    assert_eq!(adv.current_room_label(), Some("archive"));

    adv.step("go up", &mut console).unwrap();
    assert_eq!(adv.current_room_label(), None);
}

#[test]
fn unknown_room_leaves_current_room_alone() {
    let (mut adv, mut console) = stepper();
    adv.step("enter archive", &mut console).unwrap();

    adv.step("enter broom closet", &mut console).unwrap();
    adv.step("enter", &mut console).unwrap();
    assert_eq!(adv.current_room_label(), Some("archive"));

    let transcript = String::from_utf8(console.into_output()).unwrap();
    assert!(transcript.contains("There is no such room..."));
    assert!(transcript.contains("Please specify a room label"));
}

#[test]
fn look_changes_nothing() {
    let (mut adv, mut console) = stepper();
    adv.step("enter archive", &mut console).unwrap();

    for _ in 0..5 {
        adv.step("look", &mut console).unwrap();
    }
    assert_eq!(adv.current_floor().name, "cellar");
    assert_eq!(adv.current_room_label(), Some("archive"));
    assert_eq!(adv.current_room().unwrap().visited(), 1);
    assert!(adv.current_room().unwrap().item.is_some());
}

#[test]
fn unrecognized_command_mentions_exit() {
    let (_, transcript) = play("dance\nexit\n");
    assert!(transcript.contains("Unknown command! Type 'exit' to stop the game"));
}

// ── Rooms and items ────────────────────────────────────────────────────

#[test]
fn visits_are_counted_per_entry() {
    let (mut adv, mut console) = stepper();
    adv.step("enter archive", &mut console).unwrap();
    adv.step("enter archive", &mut console).unwrap();
    adv.step("enter archive", &mut console).unwrap();
    assert_eq!(adv.current_room().unwrap().visited(), 3);
}

#[test]
fn take_then_drop_round_trip() {
    let (mut adv, mut console) = stepper();
    adv.step("enter archive", &mut console).unwrap();

    adv.step("take old book", &mut console).unwrap();
    assert!(adv.player().inventory.contains("old book"));
    assert!(adv.current_room().unwrap().item.is_none());

    adv.step("drop old book", &mut console).unwrap();
    assert!(!adv.player().inventory.contains("old book"));
    let item = adv.current_room().unwrap().item.as_ref().unwrap();
    assert_eq!(item.name, "old book");
}

#[test]
fn take_in_the_hallway_finds_nothing() {
    let (mut adv, mut console) = stepper();
    adv.step("take old book", &mut console).unwrap();
    assert!(adv.player().inventory.is_empty());
}

#[test]
fn toilet_swallows_the_book() {
    let (adv, transcript) = play("enter archive\ntake old book\nenter toilet\ninventory\nexit\n");
    assert!(!adv.player().inventory.contains("old book"));
    assert!(transcript.contains("right into the water"));
    assert!(transcript.contains("You are carrying nothing."));
}

#[test]
fn toilet_without_book_is_just_a_toilet() {
    let (adv, transcript) = play("enter toilet\nexit\n");
    assert!(adv.player().inventory.is_empty());
    assert!(transcript.contains("What did you expect? It's a toilet."));
    assert!(!transcript.contains("right into the water"));
}

// ── Locker puzzle ──────────────────────────────────────────────────────

#[test]
fn room_51_is_reachable_with_lowercase_input() {
    let (adv, transcript) = play("enter room 51\nback\n");
    assert_eq!(adv.current_room_label(), Some("Room 51"));
    assert!(transcript.contains("a faded sign reads: ROOM 51"));
    assert!(transcript.contains("You step away from the machines."));
}

#[test]
fn wrong_code_then_right_code() {
    let script = "enter Room 51\nlisten\nopen\n1234\nopen\n2431\nopen\nback\nexit\n";
    let (adv, transcript) = play(script);

    assert!(transcript.contains("Beep Beep Beep Beep"));
    assert_eq!(transcript.matches("Incorrect password.").count(), 1);
    assert_eq!(transcript.matches("Subject #341 escaped.").count(), 1);
    assert_eq!(transcript.matches("Enter password").count(), 2);
    assert!(transcript.contains("The locker is already open."));
    assert!(!adv.is_active());
}

#[test]
fn first_visit_text_only_on_first_entry() {
    let (_, transcript) = play("enter room 51\nback\nenter room 51\nback\nexit\n");
    assert_eq!(transcript.matches("You push open a heavy iron door...").count(), 1);
}

#[test]
fn puzzle_state_survives_leaving_the_floor() {
    let script = "enter room 51\nopen\n2431\nback\ngo up\ngo down\nenter room 51\nopen\nback\nexit\n";
    let (_, transcript) = play(script);
    assert_eq!(transcript.matches("Enter password").count(), 1);
    assert_eq!(transcript.matches("Subject #341 escaped.").count(), 1);
}

// ── Global commands at any depth ───────────────────────────────────────

#[test]
fn exit_from_the_floor() {
    let (adv, transcript) = play("exit\ngo up\n");
    assert!(!adv.is_active());
    assert_eq!(adv.current_floor().name, "cellar");
    assert!(transcript.contains("Goodbye."));
}

#[test]
fn exit_from_inside_the_puzzle_stops_everything() {
    let (adv, transcript) = play("enter room 51\ninspect\nquit\ngo up\n");
    assert!(!adv.is_active());
    assert_eq!(adv.current_floor().name, "cellar");
    assert_eq!(transcript.matches("GROUND FLOOR").count(), 0);
}

#[test]
fn inventory_and_help_work_inside_the_puzzle() {
    let (adv, transcript) = play("enter archive\ntake old book\nenter room 51\ninventory\nhelp\nback\nexit\n");
    assert!(transcript.contains("old book - a real book made of paper"));
    assert!(transcript.contains("go <direction>"));
    assert!(adv.player().inventory.contains("old book"));
}

#[test]
fn items_can_be_left_in_the_puzzle_room() {
    let script = "enter archive\ntake old book\nenter room 51\ndrop old book\nback\nexit\n";
    let (adv, _) = play(script);
    assert!(adv.player().inventory.is_empty());
    let room = adv.current_room().unwrap();
    assert_eq!(room.label, "Room 51");
    assert_eq!(room.item.as_ref().map(|i| i.name.as_str()), Some("old book"));
}
