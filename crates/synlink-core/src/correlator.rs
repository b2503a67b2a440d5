//! Update-handle allocation and refresh correlation.
//!
//! Every outbound `tags` envelope carries a handle from a single strictly
//! increasing counter. A refresh additionally claims the at-most-one
//! outstanding slot; the matching acknowledgement releases it. Stale
//! acknowledgements — a handle other than the outstanding one — are ignored
//! and leave the slot untouched.

use synlink_proto::UpdateHandle;

use crate::error::RefreshError;

/// Allocates handles and tracks the outstanding refresh.
#[derive(Debug, Clone, Default)]
pub struct Correlator {
    last: u64,
    outstanding: Option<UpdateHandle>,
}

impl Correlator {
    /// Create a correlator with no handles issued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next handle for a fire-and-forget data push.
    pub fn next_handle(&mut self) -> UpdateHandle {
        self.last += 1;
        UpdateHandle::new(self.last)
    }

    /// Claim the outstanding slot for a refresh and allocate its handle.
    ///
    /// # Errors
    ///
    /// Returns [`RefreshError::RefreshInProgress`] when a refresh is already
    /// outstanding; the outstanding request is left unchanged.
    pub fn begin(&mut self) -> Result<UpdateHandle, RefreshError> {
        if self.outstanding.is_some() {
            return Err(RefreshError::RefreshInProgress);
        }
        let handle = self.next_handle();
        self.outstanding = Some(handle);
        Ok(handle)
    }

    /// Resolve an acknowledgement against the outstanding slot.
    ///
    /// Returns the refresh outcome and clears the slot when the handle
    /// matches; returns `None` (slot untouched) when nothing is outstanding
    /// or the handle is stale.
    pub fn acknowledge(
        &mut self,
        handle: UpdateHandle,
        error: Option<String>,
    ) -> Option<Result<(), String>> {
        match self.outstanding {
            Some(outstanding) if outstanding == handle => {
                self.outstanding = None;
                Some(error.map_or(Ok(()), Err))
            },
            _ => None,
        }
    }

    /// Release the outstanding slot without an outcome (send failure).
    pub fn abort(&mut self) {
        self.outstanding = None;
    }

    /// Handle of the outstanding refresh, if any.
    #[must_use]
    pub fn outstanding(&self) -> Option<UpdateHandle> {
        self.outstanding
    }
}
