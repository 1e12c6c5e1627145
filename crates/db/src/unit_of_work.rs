//! Transactional envelope shared by every create, update and delete.
//!
//! One mutation runs as:
//!
//! 1. **Attempt**: begin a transaction and run the work against it. Validation
//!    happens here too, so a rejected form never touches the store.
//! 2. **Committed**: the work succeeded and the commit was accepted.
//! 3. **RolledBack**: the work or the commit failed; pending changes are
//!    discarded and the store keeps its pre-attempt state.
//! 4. **Released**: the transaction's connection goes back to the pool. This
//!    happens on every path because the transaction is owned by [`run`] and
//!    dropped before it returns.
//!
//! Failures never escape as errors. They are reported once as
//! [`MutationOutcome::RolledBack`] and are not retried.

use futures::future::BoxFuture;
use fyyur_core::error::CoreError;
use fyyur_core::notice::Subject;
use sqlx::{PgConnection, PgPool};

/// Why a mutation was rolled back.
#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    /// Not found or validation failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The store rejected the statement or the commit.
    #[error("Persistence failure: {0}")]
    Persistence(#[from] sqlx::Error),
}

/// Result of one mutation attempt, with the notice to show the user.
#[derive(Debug)]
pub enum MutationOutcome<T> {
    Committed { value: T, message: String },
    RolledBack { error: MutationError, message: String },
}

impl<T> MutationOutcome<T> {
    pub fn is_committed(&self) -> bool {
        matches!(self, MutationOutcome::Committed { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            MutationOutcome::Committed { message, .. }
            | MutationOutcome::RolledBack { message, .. } => message,
        }
    }

    /// Report a mutation that was refused before any transaction began.
    pub fn rejected(subject: Subject, error: MutationError) -> Self {
        tracing::warn!(
            entity = subject.entity,
            kind = subject.kind.as_str(),
            id = ?subject.id,
            error = %error,
            "Mutation rejected before attempt",
        );
        MutationOutcome::RolledBack {
            message: subject.failure_message(),
            error,
        }
    }

    pub fn into_result(self) -> Result<T, MutationError> {
        match self {
            MutationOutcome::Committed { value, .. } => Ok(value),
            MutationOutcome::RolledBack { error, .. } => Err(error),
        }
    }
}

/// Name used in success notices when the caller did not know it up front.
pub trait DisplayName {
    fn display_name(&self) -> Option<&str>;
}

/// Run `work` inside a fresh transaction and report the outcome.
///
/// `work` receives the transaction's connection; every statement it issues is
/// part of the same unit of work.
pub async fn run<T, F>(pool: &PgPool, subject: Subject, work: F) -> MutationOutcome<T>
where
    T: DisplayName + Send,
    F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T, MutationError>> + Send,
{
    let entity = subject.entity;
    tracing::debug!(
        entity,
        kind = subject.kind.as_str(),
        id = ?subject.id,
        "Mutation attempt",
    );

    let outcome = match attempt(pool, work).await {
        Ok(value) => {
            let subject = subject.with_name(value.display_name());
            tracing::info!(
                entity = subject.entity,
                kind = subject.kind.as_str(),
                id = ?subject.id,
                "Mutation committed",
            );
            MutationOutcome::Committed {
                message: subject.success_message(),
                value,
            }
        }
        Err(error) => {
            tracing::warn!(
                entity = subject.entity,
                kind = subject.kind.as_str(),
                id = ?subject.id,
                error = %error,
                "Mutation rolled back",
            );
            MutationOutcome::RolledBack {
                message: subject.failure_message(),
                error,
            }
        }
    };

    tracing::debug!(entity, "Mutation session released");
    outcome
}

async fn attempt<T, F>(pool: &PgPool, work: F) -> Result<T, MutationError>
where
    F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T, MutationError>>,
{
    let mut tx = pool.begin().await?;

    match work(&mut *tx).await {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                // The connection is discarded by the pool; nothing was committed.
                tracing::error!(error = %rollback_err, "Explicit rollback failed");
            }
            Err(err)
        }
    }
}
