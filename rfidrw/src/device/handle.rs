// rfidrw-rs/rfidrw/src/device/handle.rs

use std::marker::PhantomData;

use crate::config::ReaderConfig;
use crate::constants::INBOUND_FRAME_LEN;
use crate::protocol::commands::buzzer::DEFAULT_BUZZER_DURATION;
use crate::protocol::{Command, InboundFrame, OutboundFrame, Response};
use crate::retry::{RetryOutcome, RetryPolicy};
use crate::transaction::{Orchestrator, TransactionState};
use crate::transport::Transport;
use crate::types::TagRead;
use crate::Result;

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Device handle that enforces initialization state at compile time.
pub struct Device<State = Uninitialized> {
    transport: Box<dyn Transport>,
    orchestrator: Orchestrator,
    retry: RetryPolicy,
    _state: PhantomData<State>,
}

impl<State> Device<State> {
    pub fn config(&self) -> &ReaderConfig {
        self.orchestrator.config()
    }

    /// State the most recent exchange ended in.
    pub fn last_state(&self) -> TransactionState {
        self.orchestrator.last_state()
    }
}

impl Device<Uninitialized> {
    /// Create a Device from an existing Transport instance (a MockTransport
    /// in tests, a UsbTransport otherwise).
    pub fn new_with_transport(transport: Box<dyn Transport>, config: ReaderConfig) -> Result<Self> {
        Ok(Self {
            transport,
            orchestrator: Orchestrator::new(config),
            retry: RetryPolicy::new(config.max_attempts),
            _state: PhantomData,
        })
    }

    /// Open the first reader found on the USB bus with default settings.
    #[cfg(feature = "usb")]
    pub fn open() -> Result<Self> {
        let transport = crate::transport::UsbTransport::open()?;
        Self::new_with_transport(Box::new(transport), ReaderConfig::default())
    }

    /// Arm the inbound transfer the reader expects to find pending before
    /// its first command.
    pub fn initialize(self) -> Result<Device<Initialized>> {
        let mut this = self;
        this.orchestrator.arm_inbound(&mut *this.transport)?;
        log::debug!("reader initialized");

        Ok(Device {
            transport: this.transport,
            orchestrator: this.orchestrator,
            retry: this.retry,
            _state: PhantomData,
        })
    }
}

impl Device<Initialized> {
    /// Run one exchange with an already framed command. `destination`
    /// receives the last full answer seen during the exchange.
    pub fn transact(
        &mut self,
        frame: &OutboundFrame,
        destination: &mut [u8; INBOUND_FRAME_LEN],
    ) -> Result<()> {
        self.orchestrator
            .execute(&mut *self.transport, frame, destination)
    }

    /// Execute a command and return the raw answer frame. The answer buffer
    /// starts zeroed, so an exchange that delivered nothing parses as an
    /// empty frame.
    pub fn execute(&mut self, cmd: &Command) -> Result<InboundFrame> {
        let frame = cmd.to_frame()?;
        let mut answer = [0u8; INBOUND_FRAME_LEN];
        self.transact(&frame, &mut answer)?;
        Ok(InboundFrame::parse(&answer))
    }

    /// Execute a command and decode its answer.
    pub fn request(&mut self, cmd: &Command) -> Result<Response> {
        let frame = self.execute(cmd)?;
        Response::decode(cmd.expected_response(), &frame)
    }

    /// Read the EM4100 tag in the field. The reader often answers a read
    /// with a stale or empty buffer, so the read is repeated up to
    /// `max_attempts` times before reporting no tag.
    pub fn read_tag(&mut self) -> Result<TagRead> {
        let cmd = Command::Em4100Read;
        let policy = self.retry;
        let outcome = policy.run(
            |attempt| {
                log::debug!("em4100 read attempt {}", attempt + 1);
                self.execute(&cmd)
            },
            |frame| frame.tag_id(),
        )?;

        match outcome {
            RetryOutcome::Accepted { value, attempts } => {
                log::info!("tag {} after {} attempt(s)", value, attempts);
                Ok(TagRead::Tag(value))
            }
            RetryOutcome::Exhausted { attempts } => {
                log::info!("no tag after {} attempt(s)", attempts);
                Ok(TagRead::NoTag)
            }
        }
    }

    /// Sound the buzzer for `duration` device ticks.
    pub fn buzz(&mut self, duration: u8) -> Result<()> {
        self.execute(&Command::Buzzer { duration })?;
        Ok(())
    }

    /// Sound the buzzer for the default duration.
    pub fn beep(&mut self) -> Result<()> {
        self.buzz(DEFAULT_BUZZER_DURATION)
    }

    /// Send a raw tag command (0x13) and decode the answer.
    pub fn tag_command(&mut self, payload: &[u8]) -> Result<Response> {
        self.request(&Command::TagCommand {
            payload: payload.to_vec(),
        })
    }

    /// Drain transfers still in flight and hand the transport back.
    /// Drain errors end the drain early; they are logged, not returned.
    pub fn finish(mut self) -> Box<dyn Transport> {
        if let Err(e) = self.orchestrator.finish(&mut *self.transport) {
            log::debug!("drain stopped: {}", e);
        }
        self.transport
    }
}
