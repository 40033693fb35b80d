use minipas::ast::expression::{BinOpKind, Expression};
use minipas::ast::statement::Statement;
use minipas::ast::{Declaration, Unit, VarDeclaration};
use minipas::parse;
use rstest::rstest;

fn parse_program(input: &str) -> Unit {
    match parse(input) {
        Ok(unit) => unit,
        Err(err) => panic!("parsing failed: {err}"),
    }
}

fn main_statements(unit: &Unit) -> &[Statement] {
    match &unit.main {
        Statement::Compound(compound) => &compound.statements,
        other => panic!("expected compound main, got {other:?}"),
    }
}

fn program(statements: Vec<Statement>) -> Unit {
    Unit::new(vec![], Statement::compound(statements))
}

fn int(value: i32) -> Expression {
    Expression::integer(value)
}

fn var(name: &str) -> Expression {
    Expression::var(name)
}

fn bin(op: BinOpKind, left: Expression, right: Expression) -> Expression {
    Expression::binary(op, left, right)
}

#[test]
fn parse_empty_program() {
    let unit = parse_program("begin end.");
    assert!(unit.declarations.is_empty());
    assert!(main_statements(&unit).is_empty());
}

#[test]
fn parse_skips_leading_whitespace() {
    let unit = parse_program("\t\t\n\n\r\r     \r\r\n\r    \t \t \n begin end.");
    assert_eq!(unit, program(vec![]));
}

#[rstest]
#[case("begin x := 42 end.", Statement::assign("x", int(42)))]
#[case("begin x := 'hello' end.", Statement::assign("x", Expression::string("hello")))]
#[case("begin x := y end.", Statement::assign("x", var("y")))]
#[case("begin x := '' end.", Statement::assign("x", Expression::string("")))]
fn parse_simple_assignment(#[case] source: &str, #[case] expected: Statement) {
    assert_eq!(parse_program(source), program(vec![expected]));
}

#[test]
fn parse_binary_expression() {
    let source = "
        BEGIN
            Result := ((20 + Func(15, 18 * (Alpha MOD 3))) DIV Beta) < 12 <> (1 = 1);
        END.
    ";

    let call = Expression::call(
        "func",
        vec![
            int(15),
            bin(BinOpKind::Mul, int(18), bin(BinOpKind::Mod, var("alpha"), int(3))),
        ],
    );
    let expected = program(vec![Statement::assign(
        "result",
        bin(
            BinOpKind::NotEq,
            bin(
                BinOpKind::Lt,
                bin(BinOpKind::Div, bin(BinOpKind::Add, int(20), call), var("beta")),
                int(12),
            ),
            bin(BinOpKind::Eq, int(1), int(1)),
        ),
    )]);

    assert_eq!(parse_program(source), expected);
}

#[rstest]
#[case("1 + 2 * 3", bin(BinOpKind::Add, int(1), bin(BinOpKind::Mul, int(2), int(3))))]
#[case("(1 + 2) * 3", bin(BinOpKind::Mul, bin(BinOpKind::Add, int(1), int(2)), int(3)))]
#[case("1 - 2 - 3", bin(BinOpKind::Sub, bin(BinOpKind::Sub, int(1), int(2)), int(3)))]
#[case("8 div 4 mod 3", bin(BinOpKind::Mod, bin(BinOpKind::Div, int(8), int(4)), int(3)))]
#[case("a < b = c > d", bin(
    BinOpKind::Eq,
    bin(BinOpKind::Lt, var("a"), var("b")),
    bin(BinOpKind::Gt, var("c"), var("d")),
))]
#[case("a <= b", bin(BinOpKind::LtEq, var("a"), var("b")))]
#[case("a >= b", bin(BinOpKind::GtEq, var("a"), var("b")))]
#[case("a <> b", bin(BinOpKind::NotEq, var("a"), var("b")))]
fn parse_operator_precedence(#[case] expression: &str, #[case] expected: Expression) {
    let source = format!("begin x := {expression} end.");
    assert_eq!(
        parse_program(&source),
        program(vec![Statement::assign("x", expected)])
    );
}

#[test]
fn keyword_prefix_is_an_identifier() {
    let unit = parse_program("begin division := 1 end.");
    assert_eq!(unit, program(vec![Statement::assign("division", int(1))]));
}

#[test]
fn div_between_operands_is_the_operator() {
    let unit = parse_program("begin x := 10 div 2 end.");
    assert_eq!(
        unit,
        program(vec![Statement::assign("x", bin(BinOpKind::Div, int(10), int(2)))])
    );
}

#[rstest]
#[case("begin end := 1 end.")]
#[case("begin x := begin end.")]
#[case("begin while := 1 end.")]
fn reserved_words_are_not_identifiers(#[case] source: &str) {
    assert!(parse(source).is_err());
}

#[test]
fn keywords_ignore_case() {
    let lower = parse_program("begin if a then x := 1 else x := 2 end.");
    let upper = parse_program("BEGIN IF a THEN x := 1 ELSE x := 2 END.");
    assert_eq!(lower, upper);
}

#[test]
fn identifiers_compare_ignoring_case() {
    assert_eq!(
        parse_program("begin Counter := COUNTER + 1 end."),
        program(vec![Statement::assign(
            "counter",
            bin(BinOpKind::Add, var("counter"), int(1))
        )])
    );
}

#[test]
fn dangling_else_binds_to_inner_if() {
    let unit = parse_program("begin if a then if b then x:=1 else x:=2 end.");
    let expected = program(vec![Statement::if_then(
        var("a"),
        Statement::if_then(
            var("b"),
            Statement::assign("x", int(1)),
            Some(Statement::assign("x", int(2))),
        ),
        None,
    )]);
    assert_eq!(unit, expected);
}

#[test]
fn parse_nested_if_statement() {
    let source = "
        begin
            if 100 > 50 then
                if 15 = 15 then
                    x := 20
                else
                    x := 15;
        end.
    ";
    let expected = program(vec![Statement::if_then(
        bin(BinOpKind::Gt, int(100), int(50)),
        Statement::if_then(
            bin(BinOpKind::Eq, int(15), int(15)),
            Statement::assign("x", int(20)),
            Some(Statement::assign("x", int(15))),
        ),
        None,
    )]);
    assert_eq!(parse_program(source), expected);
}

#[test]
fn parse_while_statement() {
    let source = "
        begin
            while I < 10 do
                I := I + 1;
        end.
    ";
    let expected = program(vec![Statement::while_do(
        bin(BinOpKind::Lt, var("i"), int(10)),
        Statement::assign("i", bin(BinOpKind::Add, var("i"), int(1))),
    )]);
    assert_eq!(parse_program(source), expected);
}

#[test]
fn assignment_and_procedure_calls_are_told_apart() {
    let source = "
        begin
            x := 5;
            Inc(I);
            WriteLn;
        end.
    ";
    let statements = parse_program(source);
    let statements = main_statements(&statements);
    assert_eq!(statements.len(), 3);
    assert!(matches!(statements[0], Statement::Assignment(_)));
    assert_eq!(statements[1], Statement::procedure("inc", vec![var("i")]));
    assert_eq!(statements[2], Statement::procedure("writeln", vec![]));
}

#[test]
fn procedure_with_empty_parentheses_has_no_arguments() {
    assert_eq!(
        parse_program("begin WriteLn() end."),
        parse_program("begin WriteLn end.")
    );
}

#[test]
fn redundant_semicolons_are_ignored() {
    assert_eq!(
        parse_program("begin ;; x:=1;; end."),
        parse_program("begin x:=1 end.")
    );
}

#[test]
fn nested_compound_statement() {
    let source = "
        begin
            x := 10;
            y := 15;
            if x + y < 30 then
                x := 20;
            z := x + y;
        end.
    ";
    let expected = program(vec![
        Statement::assign("x", int(10)),
        Statement::assign("y", int(15)),
        Statement::if_then(
            bin(BinOpKind::Lt, bin(BinOpKind::Add, var("x"), var("y")), int(30)),
            Statement::assign("x", int(20)),
            None,
        ),
        Statement::assign("z", bin(BinOpKind::Add, var("x"), var("y"))),
    ]);
    assert_eq!(parse_program(source), expected);
}

#[test]
fn parse_var_declarations() {
    let source = "
        var
            x: integer;
            y: integer;
            z: integer;

        begin
            x := 10;
            y := 20;
            z := x * y
        end.
    ";
    let unit = parse_program(source);
    assert_eq!(
        unit.declarations,
        vec![
            Declaration::from(VarDeclaration::new("x", "integer")),
            Declaration::from(VarDeclaration::new("y", "integer")),
            Declaration::from(VarDeclaration::new("z", "integer")),
        ]
    );
    assert_eq!(main_statements(&unit).len(), 3);
}

#[test]
fn parse_sample_program() {
    let source = "
        var
            Value: Integer;
            I: Integer;
            Factorial: Integer;

        begin
            Write('Enter a number: ');

            Read(Value);

            I := Value;
            Factorial := 1;
            while I > 0 do
            begin
                Factorial := Factorial * I;
                Dec(I);
            end;

            WriteLn('The factorial of ', Value, ' is ', Factorial);
        end.
    ";

    let expected = Unit::new(
        vec![
            VarDeclaration::new("value", "integer").into(),
            VarDeclaration::new("i", "integer").into(),
            VarDeclaration::new("factorial", "integer").into(),
        ],
        Statement::compound(vec![
            Statement::procedure("write", vec![Expression::string("Enter a number: ")]),
            Statement::procedure("read", vec![var("value")]),
            Statement::assign("i", var("value")),
            Statement::assign("factorial", int(1)),
            Statement::while_do(
                bin(BinOpKind::Gt, var("i"), int(0)),
                Statement::compound(vec![
                    Statement::assign("factorial", bin(BinOpKind::Mul, var("factorial"), var("i"))),
                    Statement::procedure("dec", vec![var("i")]),
                ]),
            ),
            Statement::procedure(
                "writeln",
                vec![
                    Expression::string("The factorial of "),
                    var("value"),
                    Expression::string(" is "),
                    var("factorial"),
                ],
            ),
        ]),
    );

    assert_eq!(parse_program(source), expected);
}

#[test]
fn locations_follow_leading_tokens() {
    let source = "
begin
result :=
(
15
+ alpha)

div
2;
end.
";
    let unit = parse_program(source);
    let Statement::Assignment(assignment) = &main_statements(&unit)[0] else {
        panic!("expected assignment");
    };
    assert_eq!(assignment.location.line, 3);

    let Expression::BinaryOp(division) = &assignment.value else {
        panic!("expected div");
    };
    assert_eq!(division.location.line, 8);
    assert_eq!(division.right.location().line, 9);

    let Expression::BinaryOp(addition) = division.left.as_ref() else {
        panic!("expected add");
    };
    assert_eq!(addition.location.line, 6);
    assert_eq!(addition.left.location().line, 5);
    assert_eq!(addition.right.location().line, 6);
}

#[test]
fn statement_location_is_its_first_token() {
    let unit = parse_program("\nbegin\n  x := 1;\n  if x then\n    y := 2\nend.");
    let statements = main_statements(&unit);
    assert_eq!(unit.main.location().line, 2);
    assert_eq!(statements[0].location().line, 3);
    assert_eq!(statements[1].location().line, 4);
}

#[rstest]
#[case("begin x := (1 + 2 end.", 1, "expected ')'")]
#[case("begin\nx := f(1, 2\nend.", 3, "expected ')'")]
#[case("begin x := 1", 1, "expected 'end'")]
#[case("begin if x y := 1 end.", 1, "expected 'then'")]
#[case("begin while x y := 1 end.", 1, "expected 'do'")]
#[case("var x: ; begin end.", 1, "expected type name")]
#[case("var x: integer begin end.", 1, "expected ';'")]
#[case("begin end", 1, "expected '.'")]
#[case("begin x := 99999999999 end.", 1, "integer literal out of range")]
fn hard_errors_name_what_was_expected(
    #[case] source: &str,
    #[case] line: usize,
    #[case] message: &str,
) {
    let err = parse(source).unwrap_err();
    assert_eq!(err.message, message);
    assert_eq!(err.line, line);
}

#[test]
fn trailing_input_is_rejected() {
    let err = parse("begin end. begin end.").unwrap_err();
    assert_eq!(err.message, "expected end of source");
}

#[test]
fn error_reports_deepest_line_reached() {
    let err = parse("\n\n\nx := 1").unwrap_err();
    assert_eq!(err.message, "expected end of source");
    assert_eq!(err.line, 4);
}

#[test]
fn error_display_includes_line() {
    let err = parse("begin\nx := (1\nend.").unwrap_err();
    assert_eq!(err.to_string(), "3: expected ')'");
}

#[test]
fn largest_integer_is_accepted() {
    let unit = parse_program("begin x := 2147483647 end.");
    assert_eq!(unit, program(vec![Statement::assign("x", int(i32::MAX))]));
}
