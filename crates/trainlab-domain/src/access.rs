//! Identity and authorization gate
//!
//! A request is admitted by running an ordered list of [`AccessCheck`]s over
//! the authenticated [`Caller`] and the class/student named in the request
//! path. The first failing check wins; later checks never run.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Role carried by an authenticated identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Supervisor,
}

/// Authenticated identity making a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub user_id: String,
    /// Class (tenant) the identity belongs to
    pub class_id: String,
    pub role: Role,
}

impl Caller {
    pub fn student(user_id: impl Into<String>, class_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            class_id: class_id.into(),
            role: Role::Student,
        }
    }

    pub fn supervisor(user_id: impl Into<String>, class_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            class_id: class_id.into(),
            role: Role::Supervisor,
        }
    }

    pub fn is_supervisor(&self) -> bool {
        self.role == Role::Supervisor
    }
}

/// Class and student a request acts on, taken from the request path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentScope {
    pub class_id: String,
    pub student_id: String,
}

impl StudentScope {
    pub fn new(class_id: impl Into<String>, student_id: impl Into<String>) -> Self {
        Self {
            class_id: class_id.into(),
            student_id: student_id.into(),
        }
    }
}

/// A single capability check
pub trait AccessCheck: Send + Sync + fmt::Debug {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    fn check(&self, caller: &Caller, scope: &StudentScope) -> DomainResult<()>;
}

/// Caller must belong to the class, and either be the student or supervise the class
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidUser;

impl AccessCheck for ValidUser {
    fn name(&self) -> &'static str {
        "valid-user"
    }

    fn check(&self, caller: &Caller, scope: &StudentScope) -> DomainResult<()> {
        if caller.class_id != scope.class_id {
            return Err(DomainError::forbidden("caller is not a member of this class"));
        }
        if caller.user_id == scope.student_id || caller.is_supervisor() {
            return Ok(());
        }
        Err(DomainError::forbidden("caller does not match the requested student"))
    }
}

/// Caller must supervise the class
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireSupervisor;

impl AccessCheck for RequireSupervisor {
    fn name(&self) -> &'static str {
        "require-supervisor"
    }

    fn check(&self, caller: &Caller, scope: &StudentScope) -> DomainResult<()> {
        if caller.is_supervisor() && caller.class_id == scope.class_id {
            Ok(())
        } else {
            Err(DomainError::forbidden("supervisor rights required"))
        }
    }
}

/// Ordered sequence of access checks
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    checks: Vec<Arc<dyn AccessCheck>>,
}

impl AccessGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate used for a student's own training data
    pub fn student() -> Self {
        Self::new().with_check(ValidUser)
    }

    /// Gate for operations reserved to class supervisors
    pub fn supervisor() -> Self {
        Self::new().with_check(ValidUser).with_check(RequireSupervisor)
    }

    /// Append a check; checks run in insertion order
    pub fn with_check(mut self, check: impl AccessCheck + 'static) -> Self {
        self.checks.push(Arc::new(check));
        self
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check in order, stopping at the first refusal
    pub fn admit(&self, caller: &Caller, scope: &StudentScope) -> DomainResult<()> {
        for check in &self.checks {
            if let Err(err) = check.check(caller, scope) {
                tracing::debug!(
                    check = check.name(),
                    user_id = %caller.user_id,
                    class_id = %scope.class_id,
                    student_id = %scope.student_id,
                    "access refused"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_student_may_access_own_data() {
        let gate = AccessGate::student();
        let caller = Caller::student("alice", "class-1");
        assert!(gate.admit(&caller, &StudentScope::new("class-1", "alice")).is_ok());
    }

    #[test]
    fn test_student_may_not_access_other_student() {
        let gate = AccessGate::student();
        let caller = Caller::student("alice", "class-1");
        let result = gate.admit(&caller, &StudentScope::new("class-1", "DIFFERENTUSER"));
        assert!(matches!(result, Err(DomainError::Forbidden { .. })));
    }

    #[test]
    fn test_class_must_match() {
        let gate = AccessGate::student();
        let caller = Caller::student("alice", "class-1");
        assert!(gate.admit(&caller, &StudentScope::new("class-2", "alice")).is_err());

        let teacher = Caller::supervisor("bob", "class-1");
        assert!(gate.admit(&teacher, &StudentScope::new("class-2", "alice")).is_err());
    }

    #[test]
    fn test_supervisor_acts_for_any_student_in_class() {
        let gate = AccessGate::student();
        let teacher = Caller::supervisor("bob", "class-1");
        assert!(gate.admit(&teacher, &StudentScope::new("class-1", "alice")).is_ok());
    }

    #[test]
    fn test_supervisor_gate_rejects_students() {
        let gate = AccessGate::supervisor();
        let student = Caller::student("alice", "class-1");
        let result = gate.admit(&student, &StudentScope::new("class-1", "alice"));
        assert_eq!(result, Err(DomainError::forbidden("supervisor rights required")));

        let teacher = Caller::supervisor("bob", "class-1");
        assert!(gate.admit(&teacher, &StudentScope::new("class-1", "alice")).is_ok());
    }

    #[derive(Debug, Default)]
    struct Counting(AtomicUsize);

    impl AccessCheck for Arc<Counting> {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn check(&self, _caller: &Caller, _scope: &StudentScope) -> DomainResult<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_first_refusal_short_circuits() {
        let counter = Arc::new(Counting::default());
        let gate = AccessGate::new()
            .with_check(ValidUser)
            .with_check(counter.clone());

        let caller = Caller::student("alice", "class-1");
        assert!(gate.admit(&caller, &StudentScope::new("class-1", "mallory")).is_err());
        assert_eq!(counter.0.load(Ordering::SeqCst), 0);

        assert!(gate.admit(&caller, &StudentScope::new("class-1", "alice")).is_ok());
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
        assert_eq!(gate.len(), 2);
    }
}
