use base::prelude::*;
use test_strategy::proptest;

use super::{Calculator, ChainState};
use crate::register::RegisterId;

fn type_str(calc: &mut Calculator, s: &str) {
    for ch in s.chars() {
        calc.type_char(ch);
    }
}

fn text(calc: &Calculator, id: RegisterId) -> &str {
    calc.register(id).text()
}

#[test]
fn test_initial_state() {
    let calc = Calculator::default();
    assert_eq!(text(&calc, RegisterId::A), "0");
    assert_eq!(text(&calc, RegisterId::B), "");
    assert_eq!(calc.radix(), Radix::Decimal);
    assert_eq!(calc.state(), ChainState::Idle);
    assert_eq!(calc.editing_target(), RegisterId::A);
}

#[test]
fn test_typing_replaces_leading_zero() {
    let mut calc = Calculator::default();
    type_str(&mut calc, "042");
    assert_eq!(text(&calc, RegisterId::A), "42");
}

#[test]
fn test_invalid_keystrokes_are_ignored() {
    let mut calc = Calculator::new(Radix::Octal);
    assert!(calc.type_char('7'));
    assert!(!calc.type_char('8'));
    assert!(!calc.type_char('A'));
    assert!(!calc.type_char('x'));
    assert_eq!(text(&calc, RegisterId::A), "7");

    calc.set_radix(Radix::Hexadecimal);
    assert!(calc.type_char('A'));
    assert_eq!(text(&calc, RegisterId::A), "7A");
}

#[test]
fn test_sign_is_appended_anywhere() {
    let mut calc = Calculator::default();
    type_str(&mut calc, "-5");
    assert_eq!(text(&calc, RegisterId::A), "0-5");
    calc.clear_all();
    type_str(&mut calc, "5-");
    assert_eq!(text(&calc, RegisterId::A), "5-");
    assert_eq!(calc.value(RegisterId::A), BigInt::from(0));
}

#[test]
fn test_backspace() {
    let mut calc = Calculator::default();
    type_str(&mut calc, "123");
    calc.erase();
    assert_eq!(text(&calc, RegisterId::A), "12");
    calc.erase();
    calc.erase();
    assert_eq!(text(&calc, RegisterId::A), "0");
    calc.erase();
    assert_eq!(text(&calc, RegisterId::A), "0");
}

#[test]
fn test_backspace_on_explicit_target() {
    let mut calc = Calculator::default();
    calc.append(RegisterId::B, '9');
    calc.append(RegisterId::B, '8');
    calc.backspace(RegisterId::B);
    assert_eq!(text(&calc, RegisterId::B), "9");
    calc.backspace(RegisterId::B);
    assert_eq!(text(&calc, RegisterId::B), "0");
}

#[proptest]
fn backspace_always_lands_on_zero(
    #[strategy("[-0-9A-F]{0,12}")] typed: String,
    target_b: bool,
) {
    let mut calc = Calculator::new(Radix::Hexadecimal);
    let target = if target_b { RegisterId::B } else { RegisterId::A };
    for ch in typed.chars() {
        calc.append(target, ch);
    }
    for _ in 0..=typed.len() {
        calc.backspace(target);
        let t = text(&calc, target);
        assert!(!t.is_empty());
        assert_ne!(t, "-");
    }
    assert_eq!(text(&calc, target), "0");
}

#[test]
fn test_clear_all() {
    let mut calc = Calculator::new(Radix::Binary);
    type_str(&mut calc, "101");
    calc.press_operator(Operator::Add);
    type_str(&mut calc, "1");
    calc.clear_all();
    assert_eq!(text(&calc, RegisterId::A), "0");
    assert_eq!(text(&calc, RegisterId::B), "");
    assert_eq!(calc.state(), ChainState::Idle);
    assert_eq!(calc.editing_target(), RegisterId::A);
    // The base is not part of what gets cleared.
    assert_eq!(calc.radix(), Radix::Binary);
}

#[test]
fn test_operator_from_idle() {
    let mut calc = Calculator::default();
    type_str(&mut calc, "5");
    calc.append(RegisterId::B, '4');
    calc.press_operator(Operator::Add);
    assert_eq!(calc.state(), ChainState::PendingOp(Operator::Add));
    assert_eq!(text(&calc, RegisterId::B), "");
    assert_eq!(calc.editing_target(), RegisterId::B);
}

#[test]
fn test_operator_replaces_pending_when_b_empty() {
    let mut calc = Calculator::default();
    type_str(&mut calc, "5");
    calc.press_operator(Operator::Add);
    calc.press_operator(Operator::Multiply);
    assert_eq!(calc.state(), ChainState::PendingOp(Operator::Multiply));
    assert_eq!(text(&calc, RegisterId::A), "5");
    assert_eq!(text(&calc, RegisterId::B), "");
}

#[test]
fn test_chaining_example() {
    let mut calc = Calculator::default();
    type_str(&mut calc, "5");
    calc.press_operator(Operator::Add);
    assert_eq!(calc.pending_operator(), Some(Operator::Add));
    assert_eq!(text(&calc, RegisterId::B), "");

    type_str(&mut calc, "3");
    assert_eq!(text(&calc, RegisterId::B), "3");

    calc.press_operator(Operator::Multiply);
    assert_eq!(text(&calc, RegisterId::A), "8");
    assert_eq!(calc.pending_operator(), Some(Operator::Multiply));
    assert_eq!(text(&calc, RegisterId::B), "");
    assert_eq!(calc.editing_target(), RegisterId::B);

    type_str(&mut calc, "2");
    calc.press_equals();
    assert_eq!(text(&calc, RegisterId::A), "16");
    assert_eq!(calc.pending_operator(), None);
    assert_eq!(calc.state(), ChainState::Idle);
    assert_eq!(calc.editing_target(), RegisterId::A);
    assert_eq!(text(&calc, RegisterId::B), "");
}

#[test]
fn test_equals_without_right_operand_is_noop() {
    let mut calc = Calculator::default();
    type_str(&mut calc, "9");
    calc.press_equals();
    assert_eq!(calc.state(), ChainState::Idle);
    assert_eq!(text(&calc, RegisterId::A), "9");

    calc.press_operator(Operator::Subtract);
    calc.press_equals();
    assert_eq!(calc.state(), ChainState::PendingOp(Operator::Subtract));
    assert_eq!(calc.editing_target(), RegisterId::B);
    assert_eq!(text(&calc, RegisterId::A), "9");
}

#[test]
fn test_division_by_zero_through_the_keys() {
    let mut calc = Calculator::default();
    type_str(&mut calc, "42");
    calc.press_operator(Operator::Divide);
    type_str(&mut calc, "0");
    calc.press_equals();
    assert_eq!(text(&calc, RegisterId::A), "42");
}

#[test]
fn test_result_is_formatted_in_active_base() {
    let mut calc = Calculator::new(Radix::Hexadecimal);
    type_str(&mut calc, "F");
    calc.press_operator(Operator::ShiftLeft);
    type_str(&mut calc, "4");
    calc.press_equals();
    assert_eq!(text(&calc, RegisterId::A), "F0");
    assert_eq!(calc.value(RegisterId::A), BigInt::from(240));
}

#[test]
fn test_negative_results() {
    let mut calc = Calculator::default();
    type_str(&mut calc, "3");
    calc.press_operator(Operator::Subtract);
    type_str(&mut calc, "10");
    calc.press_equals();
    assert_eq!(text(&calc, RegisterId::A), "-7");
    // A negative result can be used as the left operand.
    calc.press_operator(Operator::Multiply);
    type_str(&mut calc, "-2");
    calc.press_equals();
    assert_eq!(text(&calc, RegisterId::A), "14");
}

#[test]
fn test_toggle_bit_example() {
    let mut calc = Calculator::default();
    calc.toggle_bit(3).unwrap();
    assert_eq!(text(&calc, RegisterId::A), "8");
    assert_eq!(calc.value(RegisterId::A), BigInt::from(0b1000));
    calc.toggle_bit(3).unwrap();
    assert_eq!(text(&calc, RegisterId::A), "0");
}

#[test]
fn test_toggle_bit_out_of_window() {
    let mut calc = Calculator::default();
    type_str(&mut calc, "5");
    assert_eq!(calc.toggle_bit(16), Err(BitIndexOutOfRange(16)));
    assert_eq!(text(&calc, RegisterId::A), "5");
}

#[test]
fn test_toggle_bit_keeps_high_bits() {
    let mut calc = Calculator::new(Radix::Hexadecimal);
    type_str(&mut calc, "123456789");
    calc.toggle_bit(0).unwrap();
    assert_eq!(text(&calc, RegisterId::A), "123456788");
}

#[test]
fn test_toggle_bit_acts_on_a_while_editing_b() {
    let mut calc = Calculator::default();
    type_str(&mut calc, "1");
    calc.press_operator(Operator::Add);
    type_str(&mut calc, "2");
    calc.toggle_bit(1).unwrap();
    assert_eq!(text(&calc, RegisterId::A), "3");
    assert_eq!(text(&calc, RegisterId::B), "2");
}

#[test]
fn test_base_switch_reinterprets_text() {
    let mut calc = Calculator::default();
    type_str(&mut calc, "10");
    calc.set_radix(Radix::Hexadecimal);
    assert_eq!(text(&calc, RegisterId::A), "10");
    assert_eq!(calc.value(RegisterId::A), BigInt::from(16));

    // Digits that are not valid in the new base read as zero.
    calc.clear_all();
    type_str(&mut calc, "1F");
    calc.set_radix(Radix::Decimal);
    assert_eq!(calc.value(RegisterId::A), BigInt::from(0));
}

#[test]
fn test_displayed_register() {
    let mut calc = Calculator::default();
    type_str(&mut calc, "12");
    assert_eq!(calc.displayed_register(), RegisterId::A);
    calc.press_operator(Operator::Add);
    // B is empty, so A is still what is shown.
    assert_eq!(calc.displayed_register(), RegisterId::A);
    type_str(&mut calc, "3");
    assert_eq!(calc.displayed_register(), RegisterId::B);
    assert_eq!(calc.displayed_text(), "3");
}

#[test]
fn test_views() {
    let mut calc = Calculator::default();
    type_str(&mut calc, "255");
    let views = calc.views();
    assert_eq!(views.binary, "11111111");
    assert_eq!(views.octal, "377");
    assert_eq!(views.decimal, "255");
    assert_eq!(views.hexadecimal, "FF");
    assert_eq!(views.current(), "255");
    assert_eq!(views.in_radix(Radix::Hexadecimal), "FF");
    assert_eq!(views.shown, RegisterId::A);
    assert_eq!(views.pending, None);
    assert_eq!(views.chips.iter().filter(|b| **b).count(), 8);
    assert_eq!(views.a, "255");
    assert_eq!(views.b, "");
}

#[proptest]
fn immediate_evaluation_matches_left_to_right(
    a: u16,
    b: u16,
    c: u16,
    #[strategy(0..Operator::ALL.len())] first_op: usize,
    #[strategy(0..Operator::ALL.len())] second_op: usize,
) {
    let (op1, op2) = (Operator::ALL[first_op], Operator::ALL[second_op]);
    let mut calc = Calculator::default();
    type_str(&mut calc, &a.to_string());
    calc.press_operator(op1);
    type_str(&mut calc, &b.to_string());
    calc.press_operator(op2);
    type_str(&mut calc, &c.to_string());
    calc.press_equals();

    let first = apply(op1, &BigInt::from(a), &BigInt::from(b));
    let expected = apply(op2, &first, &BigInt::from(c));
    assert_eq!(calc.value(RegisterId::A), expected);
}
