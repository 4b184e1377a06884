// Signal-backed handle over the home screen's upload list.

use crate::uploads::{DocumentPicker, UploadList, UploadRecord};
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub struct UploadsController {
    state: Signal<UploadList>,
}

impl UploadsController {
    pub fn new(state: Signal<UploadList>) -> Self {
        Self { state }
    }

    pub fn current(&self) -> UploadList {
        (self.state)()
    }

    /// Runs one pick flow and returns the record it added, if any.
    /// A second call while the first is awaiting the picker does nothing.
    pub async fn pick_and_add<P: DocumentPicker>(mut self, picker: P) -> Option<UploadRecord> {
        if !self.state.write().begin_pick() {
            log::debug!("pdf pick already in progress");
            return None;
        }

        let outcome = picker.pick_pdf().await;
        let added = self.state.write().finish_pick(outcome);
        match &added {
            Some(record) => log::info!("added upload {} ({})", record.file_name, record.id),
            None => log::info!("pdf pick cancelled"),
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uploads::PickOutcome;
    use chrono::{Local, TimeZone};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use tokio::sync::oneshot;

    /// Shared between the test body and the component under test.
    #[derive(Clone)]
    struct PickHarness {
        gate: Rc<RefCell<Option<oneshot::Receiver<PickOutcome>>>>,
        picker_calls: Rc<Cell<usize>>,
        // (record returned by the call, list length right after it)
        finished: Rc<RefCell<Vec<(Option<UploadRecord>, usize)>>>,
    }

    impl PickHarness {
        fn new(gate: oneshot::Receiver<PickOutcome>) -> Self {
            Self {
                gate: Rc::new(RefCell::new(Some(gate))),
                picker_calls: Rc::new(Cell::new(0)),
                finished: Rc::new(RefCell::new(Vec::new())),
            }
        }
    }

    /// Stays pending until the test releases the gate. Any call after the
    /// first resolves at once with another document.
    struct GatedPicker {
        harness: PickHarness,
    }

    impl DocumentPicker for GatedPicker {
        async fn pick_pdf(&self) -> PickOutcome {
            self.harness
                .picker_calls
                .set(self.harness.picker_calls.get() + 1);
            let gate = self.harness.gate.borrow_mut().take();
            match gate {
                Some(gate) => gate.await.unwrap_or(PickOutcome::Cancelled),
                None => PickOutcome::picked("Second.pdf"),
            }
        }
    }

    fn two_overlapping_picks() -> Element {
        let harness = use_context::<PickHarness>();
        let uploads = use_signal(|| {
            UploadList::seeded(Local.timestamp_opt(1_780_000_000, 0).unwrap())
        });
        let controller = UploadsController::new(uploads);

        use_hook(move || {
            for _ in 0..2 {
                let harness = harness.clone();
                spawn(async move {
                    let picker = GatedPicker {
                        harness: harness.clone(),
                    };
                    let added = controller.pick_and_add(picker).await;
                    let len = controller.current().records().len();
                    harness.finished.borrow_mut().push((added, len));
                });
            }
        });

        rsx! {}
    }

    #[test]
    fn overlapping_picks_add_exactly_one_record() {
        let (release, gate) = oneshot::channel();
        let harness = PickHarness::new(gate);
        let mut dom = VirtualDom::new(two_overlapping_picks).with_root_context(harness.clone());

        dom.rebuild_in_place();
        dom.process_events();

        // The first call is parked in the picker; the second bailed out.
        assert_eq!(harness.picker_calls.get(), 1);
        assert_eq!(*harness.finished.borrow(), vec![(None, 2)]);

        release.send(PickOutcome::picked("Report.pdf")).unwrap();
        dom.process_events();

        let finished = harness.finished.borrow();
        assert_eq!(finished.len(), 2);
        let (added, len) = &finished[1];
        assert_eq!(added.as_ref().map(|r| r.file_name.as_str()), Some("Report.pdf"));
        assert_eq!(*len, 3);
        assert_eq!(harness.picker_calls.get(), 1);
    }

    #[test]
    fn cancelled_overlapping_picks_leave_the_list_alone() {
        let (release, gate) = oneshot::channel();
        let harness = PickHarness::new(gate);
        let mut dom = VirtualDom::new(two_overlapping_picks).with_root_context(harness.clone());

        dom.rebuild_in_place();
        dom.process_events();
        release.send(PickOutcome::Cancelled).unwrap();
        dom.process_events();

        let finished = harness.finished.borrow();
        assert_eq!(*finished, vec![(None, 2), (None, 2)]);
        assert_eq!(harness.picker_calls.get(), 1);
    }
}
