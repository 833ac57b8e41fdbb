// ⌨️ Input helpers - every value handed to the registry is validated here first

use crate::entities::{FitnessGoal, MembershipType, Specialization};
use crate::error::{EntityKind, RegistryError};
use crate::ids::EntityId;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

/// Enum the user picks from a numbered list
pub trait Choice: Copy + 'static {
    fn options() -> &'static [Self];
    fn code(&self) -> &'static str;
}

impl Choice for MembershipType {
    fn options() -> &'static [Self] {
        &MembershipType::ALL
    }

    fn code(&self) -> &'static str {
        MembershipType::code(self)
    }
}

impl Choice for FitnessGoal {
    fn options() -> &'static [Self] {
        &FitnessGoal::ALL
    }

    fn code(&self) -> &'static str {
        FitnessGoal::code(self)
    }
}

impl Choice for Specialization {
    fn options() -> &'static [Self] {
        &Specialization::ALL
    }

    fn code(&self) -> &'static str {
        Specialization::code(self)
    }
}

/// Line-oriented prompt over any reader/writer pair.
///
/// Each helper keeps asking until the answer is valid. Running out of input
/// surfaces as `io::ErrorKind::UnexpectedEof`.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompt { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        Ok(line.trim().to_string())
    }

    pub fn non_empty_string(&mut self, prompt: &str) -> io::Result<String> {
        writeln!(self.output, "{}", prompt)?;
        loop {
            let answer = self.read_line("Input non empty string: ")?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    pub fn int_in_range(&mut self, min: i64, max: i64, prompt: &str) -> io::Result<i64> {
        writeln!(self.output, "{}", prompt)?;
        loop {
            let answer = self.read_line(&format!("Enter a number from {} to {}: ", min, max))?;
            match answer.parse::<i64>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                Ok(_) => writeln!(self.output, "Number out of range! Please try again.")?,
                Err(_) => writeln!(self.output, "Invalid input! Please enter a valid int number.")?,
            }
        }
    }

    pub fn enum_choice<T: Choice>(&mut self, prompt: &str) -> io::Result<T> {
        let options = T::options();
        writeln!(self.output, "{}", prompt)?;
        for (idx, option) in options.iter().enumerate() {
            writeln!(self.output, "{}: {}", idx + 1, option.code())?;
        }

        loop {
            let answer = self.read_line(&format!("Enter a number from 1 to {}: ", options.len()))?;
            match answer.parse::<usize>() {
                Ok(choice) => match choice.checked_sub(1).and_then(|i| options.get(i)) {
                    Some(option) => return Ok(*option),
                    None => writeln!(self.output, "Number out of range! Please enter a valid enum number.")?,
                },
                Err(_) => writeln!(self.output, "Invalid input! Please enter a valid enum number.")?,
            }
        }
    }

    /// ISO calendar date, `YYYY-MM-DD`
    pub fn date(&mut self, prompt: &str) -> io::Result<NaiveDate> {
        writeln!(self.output, "{}", prompt)?;
        loop {
            let answer = self.read_line("Enter date (YYYY-MM-DD): ")?;
            match NaiveDate::parse_from_str(&answer, "%Y-%m-%d") {
                Ok(date) => return Ok(date),
                Err(_) => writeln!(self.output, "Invalid date format. Please use YYYY-MM-DD")?,
            }
        }
    }

    pub fn id(&mut self) -> io::Result<EntityId> {
        loop {
            let answer = self.read_line("Enter an int id: ")?;
            match answer.parse::<EntityId>() {
                Ok(id) => return Ok(id),
                Err(_) => writeln!(self.output, "Invalid input! Please enter a valid int number.")?,
            }
        }
    }

    /// Ask for ids until `exists` accepts one
    pub fn existing_id(
        &mut self,
        kind: EntityKind,
        exists: impl Fn(EntityId) -> bool,
    ) -> io::Result<EntityId> {
        writeln!(self.output, "Enter a {} ID", kind.as_str().to_lowercase())?;
        loop {
            let id = self.id()?;
            if exists(id) {
                return Ok(id);
            }
            writeln!(self.output, "{}", RegistryError::not_found(kind, id))?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompt: Prompt<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompt.into_output()).unwrap()
    }

    #[test]
    fn test_non_empty_string_skips_blank_lines() {
        let mut p = prompt("\n   \nAli\n");
        assert_eq!(p.non_empty_string("Enter a member name").unwrap(), "Ali");
    }

    #[test]
    fn test_int_in_range_retries() {
        let mut p = prompt("abc\n0\n121\n25\n");

        assert_eq!(p.int_in_range(1, 120, "Enter age (1-120)").unwrap(), 25);

        let out = output(p);
        assert!(out.contains("Invalid input! Please enter a valid int number."));
        assert_eq!(out.matches("Number out of range!").count(), 2);
    }

    #[test]
    fn test_enum_choice() {
        let mut p = prompt("7\nx\n2\n");

        let choice: MembershipType = p.enum_choice("Enter the membership type:").unwrap();
        assert_eq!(choice, MembershipType::Premium);

        let out = output(p);
        assert!(out.contains("1: BASIC\n2: PREMIUM\n3: VIP\n"));
        assert!(out.contains("Number out of range! Please enter a valid enum number."));
        assert!(out.contains("Invalid input! Please enter a valid enum number."));
    }

    #[test]
    fn test_enum_choice_specialization() {
        let mut p = prompt("2\n");
        let choice: Specialization = p.enum_choice("Enter the trainer specialization:").unwrap();
        assert_eq!(choice, Specialization::StrengthTraining);
    }

    #[test]
    fn test_date_retries_until_iso() {
        let mut p = prompt("05/01/2024\n2024-13-01\n2024-05-01\n");

        assert_eq!(
            p.date("Enter a class date").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        assert_eq!(output(p).matches("Invalid date format").count(), 2);
    }

    #[test]
    fn test_existing_id_reports_missing() {
        let mut p = prompt("9\n3\n");

        let id = p
            .existing_id(EntityKind::Member, |id| id == EntityId::new(3))
            .unwrap();

        assert_eq!(id, EntityId::new(3));
        let out = output(p);
        assert!(out.contains("Enter a member ID"));
        assert!(out.contains("Member with id: 9 doesn't exist"));
    }

    #[test]
    fn test_end_of_input() {
        let mut p = prompt("");
        let err = p.non_empty_string("Enter a member name").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
