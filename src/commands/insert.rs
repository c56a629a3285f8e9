//! `simcfg insert`: splice a literal into a stored prompt.

use crate::cli::InsertArgs;
use crate::error::{Result, SimError};
use crate::model::{Project, RoleId};
use crate::splice::{CaretScheduler, TextBuffer, TextInput, insert_at_selection};
use crate::variables::Namespace;
use tracing::debug;

pub fn cmd_insert(args: InsertArgs) -> Result<()> {
    let mut project = Project::load(&args.project)?;
    let literal = resolve_literal(&project, &args)?;
    let selection = match (args.start, args.end) {
        (None, None) => None,
        (Some(start), end) => Some((start, end.unwrap_or(start))),
        (None, Some(_)) => {
            return Err(SimError::UserError("--end requires --start".to_string()));
        }
    };

    let caret = insert_into_prompt(&mut project, args.role, &args.slot, &literal, selection)?;
    project.save(&args.project)?;

    println!("Inserted {} into role {} '{}'", literal, args.role, args.slot);
    println!("  Caret: {}", caret);
    Ok(())
}

/// The literal the arguments ask for.
fn resolve_literal(project: &Project, args: &InsertArgs) -> Result<String> {
    let field_token = [
        (Namespace::Meta, &args.meta),
        (Namespace::Public, &args.public),
        (Namespace::Private, &args.private),
    ]
    .into_iter()
    .find_map(|(ns, field)| field.as_ref().map(|f| ns.token(f)));

    if let Some(token) = field_token {
        return Ok(token);
    }

    if let Some(name) = &args.partial {
        return project
            .partial(name)
            .map(|p| p.include_reference())
            .ok_or_else(|| SimError::UserError(format!("no prompt partial named '{}'", name)));
    }

    args.text
        .clone()
        .ok_or_else(|| SimError::UserError("nothing to insert".to_string()))
}

/// Splice `literal` into a role's prompt slot and commit it to the project.
///
/// `selection` defaults to a caret at the end of the prompt. A missing slot
/// starts out empty. Returns the caret after the insertion.
pub(crate) fn insert_into_prompt(
    project: &mut Project,
    role_id: RoleId,
    slot: &str,
    literal: &str,
    selection: Option<(usize, usize)>,
) -> Result<usize> {
    let role = project
        .role_mut(role_id)
        .ok_or_else(|| SimError::UserError(format!("no agent role with id {}", role_id)))?;

    let mut input = TextBuffer::new(role.prompts.get(slot).cloned().unwrap_or_default());
    if let Some((start, end)) = selection {
        if start > end || end > input.len_chars() {
            return Err(SimError::UserError(format!(
                "selection {}..{} is outside the prompt (length {})",
                start,
                end,
                input.len_chars()
            )));
        }
        input = input.with_selection(start, end);
    }

    let mut scheduler = CaretScheduler::new();
    let mut committed = None;
    insert_at_selection(Some(&input), literal, &mut scheduler, |value| {
        committed = Some(value);
    });

    if let Some(value) = committed {
        role.prompts.insert(slot.to_string(), value.clone());
        input.render(value);
    }

    let caret = scheduler
        .after_commit(&mut input)
        .unwrap_or(input.selection().1);
    debug!(role_id, slot, caret, "inserted literal");
    Ok(caret)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with_prompt(text: &str) -> Project {
        let mut project = Project::new("Insert");
        let role_id = project.add_role("Buyer", "gpt-4o");
        project
            .role_mut(role_id)
            .unwrap()
            .prompts
            .insert("user".to_string(), text.to_string());
        project
    }

    #[test]
    fn test_insert_appends_by_default() {
        let mut project = project_with_prompt("Price: ");
        let token = Namespace::Public.token("price");

        let caret = insert_into_prompt(&mut project, 1, "user", &token, None).unwrap();

        assert_eq!(
            project.role(1).unwrap().prompts["user"],
            "Price: {{ public_information.price }}"
        );
        assert_eq!(caret, 7 + token.len());
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut project = project_with_prompt("Balance: X dollars");

        let caret = insert_into_prompt(
            &mut project,
            1,
            "user",
            "{{ private_information.balance }}",
            Some((9, 10)),
        )
        .unwrap();

        assert_eq!(
            project.role(1).unwrap().prompts["user"],
            "Balance: {{ private_information.balance }} dollars"
        );
        assert_eq!(caret, 9 + 33);
    }

    #[test]
    fn test_insert_into_new_slot() {
        let mut project = project_with_prompt("");

        let caret =
            insert_into_prompt(&mut project, 1, "system_phase_2", "Phase two.", None).unwrap();

        assert_eq!(project.role(1).unwrap().prompts["system_phase_2"], "Phase two.");
        assert_eq!(caret, 10);
    }

    #[test]
    fn test_insert_unknown_role_is_error() {
        let mut project = project_with_prompt("");
        let err = insert_into_prompt(&mut project, 42, "user", "x", None).unwrap_err();
        assert!(err.to_string().contains("no agent role with id 42"));
    }

    #[test]
    fn test_insert_rejects_out_of_range_selection() {
        let mut project = project_with_prompt("short");

        let err = insert_into_prompt(&mut project, 1, "user", "x", Some((2, 9))).unwrap_err();
        assert!(err.to_string().contains("outside the prompt"));
        assert_eq!(project.role(1).unwrap().prompts["user"], "short");
    }
}
