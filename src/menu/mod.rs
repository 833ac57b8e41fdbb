// 🖥️ Console menu - gathers validated input, calls the registry, renders results
//
// The menu never mutates entities directly; everything goes through FitnessRegistry.

pub mod prompt;

pub use prompt::{Choice, Prompt};

use crate::entities::{FitnessGoal, MembershipType, ProgressEntry, Specialization};
use crate::error::EntityKind;
use crate::ids::EntityId;
use crate::registry::FitnessRegistry;
use anyhow::{bail, Result};
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Bounds the menu enforces before values reach the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_capacity: u32,
    pub max_payment: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_capacity: 30,
            max_payment: 10_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RegisterMember,
    ViewMembers,
    RegisterTrainer,
    ScheduleClass,
    AssignMemberToClass,
    ProcessPayment,
    CancelMembership,
    RevenueReport,
    ViewMemberProgress,
    LogMemberProgress,
    UpdateMembership,
    RemoveTrainer,
    ViewClasses,
    AssignTrainerToClass,
    CancelClassBooking,
    ViewTransactions,
    ExportSnapshot,
}

impl Command {
    /// Menu order; the number shown is the index + 1
    pub const ALL: [Command; 17] = [
        Command::RegisterMember,
        Command::ViewMembers,
        Command::RegisterTrainer,
        Command::ScheduleClass,
        Command::AssignMemberToClass,
        Command::ProcessPayment,
        Command::CancelMembership,
        Command::RevenueReport,
        Command::ViewMemberProgress,
        Command::LogMemberProgress,
        Command::UpdateMembership,
        Command::RemoveTrainer,
        Command::ViewClasses,
        Command::AssignTrainerToClass,
        Command::CancelClassBooking,
        Command::ViewTransactions,
        Command::ExportSnapshot,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Command::RegisterMember => "Register New Member",
            Command::ViewMembers => "View All Members",
            Command::RegisterTrainer => "Register New Trainer",
            Command::ScheduleClass => "Schedule New Class",
            Command::AssignMemberToClass => "Assign Member To Class",
            Command::ProcessPayment => "Process Payment",
            Command::CancelMembership => "Cancel Membership",
            Command::RevenueReport => "Generate Revenue Report",
            Command::ViewMemberProgress => "View Member Progress",
            Command::LogMemberProgress => "Log Member Progress",
            Command::UpdateMembership => "Update Membership",
            Command::RemoveTrainer => "Remove Trainer",
            Command::ViewClasses => "View Classes",
            Command::AssignTrainerToClass => "Assign Trainer To Class",
            Command::CancelClassBooking => "Cancel Class Booking",
            Command::ViewTransactions => "View Transactions",
            Command::ExportSnapshot => "Export Snapshot",
        }
    }
}

fn is_end_of_input(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::UnexpectedEof)
}

/// Interactive session over one registry
pub struct Menu<R, W> {
    registry: FitnessRegistry,
    prompt: Prompt<R, W>,
    limits: Limits,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(registry: FitnessRegistry, input: R, output: W, limits: Limits) -> Self {
        Menu {
            registry,
            prompt: Prompt::new(input, output),
            limits,
        }
    }

    pub fn registry(&self) -> &FitnessRegistry {
        &self.registry
    }

    pub fn into_parts(self) -> (FitnessRegistry, W) {
        (self.registry, self.prompt.into_output())
    }

    /// Run until the user picks exit or input runs out.
    ///
    /// A failing command is reported and the loop keeps going.
    pub fn run(&mut self) -> Result<()> {
        let exit_number = Command::ALL.len() + 1;
        writeln!(self.prompt.output(), "{}", "Smart Fitness Management System".bold())?;

        loop {
            let out = self.prompt.output();
            for (idx, command) in Command::ALL.iter().enumerate() {
                writeln!(out, "{}. {}", idx + 1, command.description())?;
            }
            writeln!(out, "To exit print: {}", exit_number)?;

            let choice = match self
                .prompt
                .int_in_range(1, exit_number as i64, "Enter a command number")
            {
                Ok(choice) => choice as usize,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e.into()),
            };

            let Some(&command) = Command::ALL.get(choice - 1) else {
                break;
            };

            match self.execute(command) {
                Ok(()) => {}
                Err(e) if is_end_of_input(&e) => break,
                Err(e) => {
                    warn!(command = command.description(), "command failed: {:#}", e);
                    let message = format!("Error executing command: {}", e);
                    writeln!(self.prompt.output(), "{}", message.red())?;
                }
            }
        }

        writeln!(self.prompt.output(), "Good bye!")?;
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::RegisterMember => self.register_member(),
            Command::ViewMembers => self.view_members(),
            Command::RegisterTrainer => self.register_trainer(),
            Command::ScheduleClass => self.schedule_class(),
            Command::AssignMemberToClass => self.assign_member_to_class(),
            Command::ProcessPayment => self.process_payment(),
            Command::CancelMembership => self.cancel_membership(),
            Command::RevenueReport => self.revenue_report(),
            Command::ViewMemberProgress => self.view_member_progress(),
            Command::LogMemberProgress => self.log_member_progress(),
            Command::UpdateMembership => self.update_membership(),
            Command::RemoveTrainer => self.remove_trainer(),
            Command::ViewClasses => self.view_classes(),
            Command::AssignTrainerToClass => self.assign_trainer_to_class(),
            Command::CancelClassBooking => self.cancel_class_booking(),
            Command::ViewTransactions => self.view_transactions(),
            Command::ExportSnapshot => self.export_snapshot(),
        }
    }

    // ------------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------------

    fn pick_member(&mut self) -> Result<EntityId> {
        if self.registry.view_members().is_empty() {
            bail!("no members registered");
        }
        let registry = &self.registry;
        Ok(self
            .prompt
            .existing_id(EntityKind::Member, |id| registry.member(id).is_some())?)
    }

    fn pick_trainer(&mut self) -> Result<EntityId> {
        if self.registry.view_trainers().is_empty() {
            bail!("no trainers registered");
        }
        let registry = &self.registry;
        Ok(self
            .prompt
            .existing_id(EntityKind::Trainer, |id| registry.trainer(id).is_some())?)
    }

    fn pick_class(&mut self) -> Result<EntityId> {
        if self.registry.view_classes().is_empty() {
            bail!("no classes scheduled");
        }
        let registry = &self.registry;
        Ok(self
            .prompt
            .existing_id(EntityKind::FitnessClass, |id| registry.fitness_class(id).is_some())?)
    }

    fn member_name(&self, member_id: EntityId) -> String {
        self.registry
            .member(member_id)
            .map(|m| m.name().to_string())
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------

    fn register_member(&mut self) -> Result<()> {
        let name = self.prompt.non_empty_string("Enter a member name")?;
        let age = self.prompt.int_in_range(1, 120, "Enter age (1-120)")? as u8;
        let membership: MembershipType = self.prompt.enum_choice("Enter the membership type:")?;
        let goal: FitnessGoal = self.prompt.enum_choice("Enter the goal:")?;

        let id = self.registry.register_member(name.as_str(), age, membership, goal).id();
        writeln!(
            self.prompt.output(),
            "Member {} registered successfully with ID {}",
            name, id
        )?;
        Ok(())
    }

    fn view_members(&mut self) -> Result<()> {
        let out = self.prompt.output();
        writeln!(out, "Registered Members:")?;
        for member in self.registry.view_members() {
            writeln!(
                out,
                "ID: {}, Name: {}, Age: {}, Membership: {}, Goal: {}",
                member.id(),
                member.name(),
                member.age(),
                member.membership_type(),
                member.fitness_goal()
            )?;
        }
        Ok(())
    }

    fn register_trainer(&mut self) -> Result<()> {
        let name = self.prompt.non_empty_string("Enter a trainer name")?;
        let specialization: Specialization =
            self.prompt.enum_choice("Enter the trainer specialization:")?;

        let id = self.registry.add_trainer(name.as_str(), specialization).id();
        writeln!(
            self.prompt.output(),
            "Trainer {} added successfully with ID {}",
            name, id
        )?;
        Ok(())
    }

    fn schedule_class(&mut self) -> Result<()> {
        let name = self.prompt.non_empty_string("Enter a class name")?;
        let date = self.prompt.date("Enter a class date")?;
        let trainer = if self.registry.view_trainers().is_empty() {
            writeln!(
                self.prompt.output(),
                "No trainers registered; the class will start without a trainer"
            )?;
            None
        } else {
            Some(self.pick_trainer()?)
        };
        let capacity = self.prompt.int_in_range(
            0,
            i64::from(self.limits.max_capacity),
            "Enter the class capacity",
        )? as u32;

        let id = self.registry.schedule_class(name.as_str(), trainer, capacity, date)?.id();
        writeln!(
            self.prompt.output(),
            "Fitness class {} added successfully with ID {}",
            name, id
        )?;
        Ok(())
    }

    fn assign_member_to_class(&mut self) -> Result<()> {
        let member_id = self.pick_member()?;
        let class_id = self.pick_class()?;

        let out_line = if self.registry.enroll_member(member_id, class_id)? {
            format!(
                "Success. You have added the member {} to class {}",
                member_id, class_id
            )
        } else {
            "Fail. Selected class is full".to_string()
        };
        writeln!(self.prompt.output(), "{}", out_line)?;
        Ok(())
    }

    fn process_payment(&mut self) -> Result<()> {
        let member_id = self.pick_member()?;
        let amount = self.prompt.int_in_range(
            1,
            i64::from(self.limits.max_payment),
            "Enter payment amount:",
        )?;
        let membership: MembershipType = self
            .prompt
            .enum_choice("Enter membership type/service paid for:")?;

        let receipt = self
            .registry
            .process_payment(member_id, amount as f64, membership)?
            .generate_receipt();
        let out = self.prompt.output();
        writeln!(out, "Payment processed successfully.")?;
        writeln!(out, "{}", receipt)?;
        Ok(())
    }

    fn cancel_membership(&mut self) -> Result<()> {
        let member_id = self.pick_member()?;

        let member = self.registry.cancel_membership(member_id)?;
        writeln!(
            self.prompt.output(),
            "Membership for {} cancelled.",
            member.name()
        )?;
        Ok(())
    }

    fn revenue_report(&mut self) -> Result<()> {
        let total = self.registry.generate_revenue_report();
        let lines = self.registry.revenue_by_membership();

        let out = self.prompt.output();
        writeln!(out, "Total Revenue: ${}", total)?;
        for line in lines {
            writeln!(
                out,
                "  {}: {} payment(s), ${}",
                line.membership_type, line.transactions, line.total
            )?;
        }
        Ok(())
    }

    fn view_member_progress(&mut self) -> Result<()> {
        let member_id = self.pick_member()?;

        let out = self.prompt.output();
        match self.registry.view_member_progress(member_id) {
            Some(progress) if !progress.is_empty() => {
                for (goal, entries) in progress {
                    writeln!(out, "Goal: {}", goal.code())?;
                    for entry in entries {
                        writeln!(out, "  {}", entry)?;
                    }
                }
            }
            _ => writeln!(out, "No progress found.")?,
        }
        Ok(())
    }

    fn log_member_progress(&mut self) -> Result<()> {
        let member_id = self.pick_member()?;
        let goal: FitnessGoal = self.prompt.enum_choice("Enter the goal:")?;
        let note = self.prompt.non_empty_string("Enter a progress note")?;
        let recorded_on = self.prompt.date("Enter the progress date")?;

        self.registry
            .track_progress(member_id, ProgressEntry::new(note, recorded_on), goal)?;
        let name = self.member_name(member_id);
        writeln!(self.prompt.output(), "Progress logged for {}.", name)?;
        Ok(())
    }

    fn update_membership(&mut self) -> Result<()> {
        let member_id = self.pick_member()?;
        let membership: MembershipType = self.prompt.enum_choice("Enter the new membership type:")?;

        self.registry.update_membership(member_id, membership)?;
        let name = self.member_name(member_id);
        writeln!(
            self.prompt.output(),
            "Membership for {} updated to {}.",
            name, membership
        )?;
        Ok(())
    }

    fn remove_trainer(&mut self) -> Result<()> {
        let trainer_id = self.pick_trainer()?;
        let orphaned = self.registry.classes_for_trainer(trainer_id).len();

        let trainer = self.registry.remove_trainer(trainer_id)?;
        writeln!(
            self.prompt.output(),
            "Trainer {} removed. {} class(es) left without a trainer.",
            trainer.name(),
            orphaned
        )?;
        Ok(())
    }

    fn view_classes(&mut self) -> Result<()> {
        let out = self.prompt.output();
        writeln!(out, "Scheduled Classes:")?;
        for class in self.registry.view_classes() {
            let trainer = class
                .trainer()
                .and_then(|id| self.registry.trainer(id))
                .map(|t| t.name().to_string())
                .unwrap_or_else(|| "none".to_string());
            writeln!(
                out,
                "ID: {}, Name: {}, Trainer: {}, Enrolled: {}/{}, Date: {}",
                class.id(),
                class.name(),
                trainer,
                class.current_enrollments(),
                class.capacity(),
                class.schedule().format("%Y-%m-%d")
            )?;
        }
        Ok(())
    }

    fn assign_trainer_to_class(&mut self) -> Result<()> {
        let trainer_id = self.pick_trainer()?;
        let class_id = self.pick_class()?;

        self.registry.assign_trainer(trainer_id, class_id)?;
        writeln!(
            self.prompt.output(),
            "Trainer {} now runs class {}",
            trainer_id, class_id
        )?;
        Ok(())
    }

    fn cancel_class_booking(&mut self) -> Result<()> {
        let member_id = self.pick_member()?;
        let class_id = self.pick_class()?;

        let enrolled = self
            .registry
            .fitness_class(class_id)
            .is_some_and(|class| class.is_enrolled(member_id));
        if !enrolled {
            writeln!(
                self.prompt.output(),
                "Member {} is not enrolled in class {}",
                member_id, class_id
            )?;
            return Ok(());
        }

        self.registry.cancel_booking(member_id, class_id)?;
        writeln!(self.prompt.output(), "Booking cancelled.")?;
        Ok(())
    }

    fn view_transactions(&mut self) -> Result<()> {
        let out = self.prompt.output();
        writeln!(out, "Transactions:")?;
        for tx in self.registry.view_transactions() {
            writeln!(
                out,
                "#{} {} {} {} ${}",
                tx.id(),
                tx.payment_date().format("%Y-%m-%d"),
                tx.member_name(),
                tx.membership_type().code(),
                tx.amount_paid()
            )?;
        }
        Ok(())
    }

    fn export_snapshot(&mut self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.registry.snapshot())?;
        writeln!(self.prompt.output(), "{}", json)?;
        Ok(())
    }
}
