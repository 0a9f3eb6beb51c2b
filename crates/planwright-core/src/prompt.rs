//! Deterministic prompt assembly.
//!
//! A pure format-string substitution: no escaping, no truncation. Identical
//! inputs must produce byte-identical prompts, since regeneration with the
//! same form is expected to resend the same request.

use crate::form::LessonForm;

/// Assemble the completion prompt from normalized template text and the
/// filled-in form.
#[must_use]
pub fn build_prompt(template_text: &str, form: &LessonForm) -> String {
    format!(
        "Use the following template to create a custom lesson plan:\n\
         TEMPLATE:\n\
         {template_text}\n\
         \n\
         Customize it based on the following instructions:\n\
         Lesson Date: {date}\n\
         Class Period: {class_period}\n\
         Class Name: {class_name}\n\
         Instructor: {instructor}\n\
         Unit Number: {unit_number}\n\
         Unit Name: {unit_name}\n\
         Lesson Number: {lesson_number}\n\
         Lesson Name: {lesson_name}\n\
         Lesson Standard: {standard}\n\
         Lesson Objective: {objective}\n\
         Lesson Description: {description}\n\
         \n\
         Ensure the lesson plan includes all of the sections in the template above.",
        date = form.date,
        class_period = form.class_period,
        class_name = form.class_name,
        instructor = form.instructor,
        unit_number = form.unit_number,
        unit_name = form.unit_name,
        lesson_number = form.lesson_number,
        lesson_name = form.lesson_name,
        standard = form.standard,
        objective = form.objective,
        description = form.description,
    )
}
