extern crate bignum;
use bignum::*;
use std::str::FromStr;

fn main() {
    println!("Hello, Big Numbers!");
    let a = BigNum::from_str("123").unwrap();
    let b = BigNum::from_str("456").unwrap();
    println!("a = {}, b = {}", a, b);

    println!("compare(a, b) = {}", compare(&a, &b) as i8);
    println!("sum: {}", &a + &b);
    println!("product: {}", &a * &b);

    match sub(&a, &b) {
        Ok(diff) => println!("difference: {}", diff),
        Err(err) => println!("cannot subtract: {}", err),
    }
    println!("difference: {}", sub(&b, &a).unwrap());

    let scaled = mul_single(&a, Digit::new(7).unwrap(), 3).unwrap();
    println!("123 * 7 * 10^3 = {}", scaled);

    let mut factorial = BigNum::one();
    for n in 1u32..=30 {
        factorial *= n;
    }
    println!("30! = {}", factorial);
    println!("debug: {:?}", factorial.pow(4));

    release(factorial);
    release(None::<BigNum>);
}
