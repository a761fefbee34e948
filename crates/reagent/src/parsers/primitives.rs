use nom::{
    branch::alt,
    bytes::complete::take_till,
    character::complete::{anychar, digit1},
    combinator::{map, recognize},
    sequence::pair,
    IResult,
};

pub type ParseResult<'a, O> = IResult<&'a str, O>;

/// A run of characters that all belong to the same class
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum CharacterRun<'s> {
    Digits(&'s str),
    Letters(&'s str),
}

/// Element Token = any character , { any character - uppercase } ;
pub fn element_token(i: &str) -> ParseResult<&str> {
    recognize(pair(anychar, take_till(char::is_uppercase)))(i)
}

/// Character Run = digit , { digit } | non-digit , { non-digit } ;
pub fn character_run(i: &str) -> ParseResult<CharacterRun> {
    let digits = map(digit1, CharacterRun::Digits);
    let letters = map(
        recognize(pair(anychar, take_till(|c: char| c.is_ascii_digit()))),
        CharacterRun::Letters,
    );
    alt((digits, letters))(i)
}
