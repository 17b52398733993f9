use crate::models::domain::{Caller, Quiz, Visibility};

/// Whether `caller` may read `quiz`. Public quizzes are open to
/// everyone including anonymous callers; private quizzes only to their
/// author.
pub fn can_read(caller: Option<&Caller>, quiz: &Quiz) -> bool {
    match quiz.visibility {
        Visibility::Public => true,
        Visibility::Private => caller.map(|c| c.id == quiz.author_id).unwrap_or(false),
    }
}

/// Whether `caller` may update or delete `quiz`. Owner only; there is
/// no admin override.
pub fn can_write(caller: &Caller, quiz: &Quiz) -> bool {
    caller.id == quiz.author_id
}
