//! Worked examples run end to end against the standard table.
//!
//! Expected values follow the conversion formula with the compiled-in rates:
//! EUR = 0.862361, so `3` scaled into EUR is `2.587083`.

use fx_money::{Difference, Exchange, Money, MoneyError, Operand, RateTable};

fn v1() -> Money {
    Money::new(23.43, "EUR")
}

fn v2() -> Money {
    Money::usd(19.97)
}

#[test]
fn worked_examples() {
    let rates = RateTable::standard();
    let fx = Exchange::new(&rates);

    assert_eq!(fx.add(&v1(), &v2()).unwrap().to_string(), "40.65 EUR");
    assert_eq!(fx.add(&v2(), &v1()).unwrap().to_string(), "47.14 USD");
    assert_eq!(fx.add(&v1(), 3_i32).unwrap().to_string(), "26.02 EUR");
    assert_eq!(fx.add_reflected(3.0, &v1()).unwrap().to_string(), "30.17 USD");
    assert_eq!(fx.sub(&v1(), 3_i32).unwrap().to_string(), "20.84 EUR");

    let d = fx.sub_reflected(30.0, &v2()).unwrap();
    assert!(matches!(d, Difference::Amount(_)));
    assert_eq!(d.to_string(), "10.03");
}

#[test]
fn reflected_sub_wraps_non_usd() {
    let rates = RateTable::standard();
    let fx = Exchange::new(&rates);

    let d = fx.sub_reflected(30.0, &v1()).unwrap();
    assert_eq!(d.as_money().map(Money::unit), Some("USD"));
    assert_eq!(d.to_string(), "6.57 USD");
}

#[test]
fn in_place_ops_mutate_receiver() {
    let rates = RateTable::standard();
    let fx = Exchange::new(&rates);

    let mut m = v1();
    fx.add_assign(&mut m, &v2()).unwrap();
    assert_eq!(m.to_string(), "40.65 EUR");

    fx.sub_assign(&mut m, &v2()).unwrap();
    assert_eq!(m.to_string(), "23.43 EUR");

    fx.sub_assign(&mut m, 3_i32).unwrap();
    assert_eq!(m.to_string(), "20.84 EUR");
}

#[test]
fn change_to_then_display() {
    let rates = RateTable::standard();
    let fx = Exchange::new(&rates);

    let mut m = v1();
    fx.change_to(&mut m, "JPY").unwrap();
    assert_eq!(m.to_string(), "3016.37 JPY");

    fx.change_to(&mut m, "EUR").unwrap();
    assert_eq!(m.to_string(), "23.43 EUR");
}

#[test]
fn display_format() {
    assert_eq!(Money::new(41.2138, "EUR").to_string(), "41.21 EUR");
    assert_eq!(format!("{:?}", Money::new(41.2138, "EUR")), "41.21 EUR");
}

#[test]
fn unknown_code_is_reported() {
    let rates = RateTable::standard();
    let fx = Exchange::new(&rates);
    let xyz = Money::new(5.0, "XYZ");
    let expected = MoneyError::UnknownCurrency("XYZ".to_string());

    assert_eq!(fx.add(&xyz, 1.0).unwrap_err(), expected);
    assert_eq!(fx.add(&v1(), &xyz).unwrap_err(), expected);
    assert_eq!(fx.sub(&xyz, &v1()).unwrap_err(), expected);
    assert_eq!(fx.add_reflected(1.0, &xyz).unwrap_err(), expected);
    assert_eq!(fx.sub_reflected(1.0, &xyz).unwrap_err(), expected);
    assert_eq!(fx.converted(&v1(), "XYZ").unwrap_err(), expected);

    let mut m = v1();
    assert_eq!(fx.change_to(&mut m, "XYZ").unwrap_err(), expected);
    assert_eq!(fx.add_assign(&mut m, &xyz).unwrap_err(), expected);
    assert_eq!(fx.sub_assign(&mut m, &xyz).unwrap_err(), expected);
    assert_eq!(m, v1());
}

#[test]
fn custom_table_injection() {
    let rates = RateTable::from_rates([("USD", 1.0), ("EUR", 0.5), ("SEK", 10.0)]).unwrap();
    let fx = Exchange::new(&rates);

    let sek = Money::new(100.0, "SEK");
    let eur = fx.converted(&sek, "EUR").unwrap();
    assert_eq!(eur, Money::new(5.0, "EUR"));

    // Free functions take the same table
    let r = fx_money::ops::add(&rates, &eur, Operand::Amount(2.0)).unwrap();
    assert_eq!(r, Money::new(6.0, "EUR"));

    // Codes from the standard table are not implied
    assert!(fx.converted(&sek, "GBP").is_err());
}
