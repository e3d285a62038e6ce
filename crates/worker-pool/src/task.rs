/// A type-erased unit of work.
///
/// The original C/C++ pool this is modeled on erases a task to a raw
/// `(fn, *mut c_void)` pair so it can cross a C ABI boundary, with a typed
/// wrapper (`TaskCollection`) layered on top to own the payload. Rust has no
/// such boundary to cross at this layer, so a boxed trait object does the
/// same job — own the closure's captures until the task runs — without any
/// unsafe payload-pointer bookkeeping.
pub(crate) struct Task {
    invoke: Box<dyn FnOnce() + Send + 'static>,
}

impl Task {
    pub(crate) fn new<F>(f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self { invoke: Box::new(f) }
    }

    pub(crate) fn invoke(self) {
        (self.invoke)();
    }
}
