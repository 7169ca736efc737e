use lower_js::cst::build::layout;
use lower_js::cst::build::rule;
use lower_js::cst::build::tok;
use lower_js::cst::CstKind;
use lower_js::lower;
use lower_js::LowerOptions;
use std::io;
use std::sync::Arc;
use std::sync::Mutex;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct SharedWriter {
  buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedWriter {
  fn output(&self) -> String {
    String::from_utf8(self.buffer.lock().unwrap().clone()).unwrap()
  }
}

struct SharedWriterGuard<'a> {
  buffer: &'a Arc<Mutex<Vec<u8>>>,
}

impl<'a> io::Write for SharedWriterGuard<'a> {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.buffer.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

impl<'a> MakeWriter<'a> for SharedWriter {
  type Writer = SharedWriterGuard<'a>;

  fn make_writer(&'a self) -> Self::Writer {
    SharedWriterGuard {
      buffer: &self.buffer,
    }
  }
}

#[test]
fn lowering_emits_program_span_and_events() {
  let writer = SharedWriter::default();
  let subscriber = tracing_subscriber::fmt()
    .with_span_events(FmtSpan::CLOSE)
    .with_max_level(tracing::Level::DEBUG)
    .with_ansi(false)
    .with_writer(writer.clone())
    .finish();
  let _guard = tracing::subscriber::set_default(subscriber);

  // ();
  let (cst, _) = layout(rule(CstKind::Script, vec![rule(CstKind::ExpressionStatement, vec![
    rule(CstKind::CoverParenthesizedExpressionAndArrowParameterList, vec![tok("("), tok(")")]),
    tok(";"),
  ])]));
  let program = lower(&cst, LowerOptions::default()).unwrap();
  assert_eq!(program.stx.body.len(), 1);

  drop(_guard);
  let output = writer.output();
  assert!(output.contains("lower_program"), "expected lower_program span, got: {output}");
  assert!(output.contains("lowered program"), "expected summary event, got: {output}");
  assert!(
    output.contains("lowering empty parentheses"),
    "expected empty parentheses event, got: {output}"
  );
}
