rosrust::rosmsg_include!(
    actionlib_msgs / GoalID,
    actionlib_msgs / GoalStatus,
    actionlib_msgs / GoalStatusArray,
    geometry_msgs / PoseStamped,
    move_base_msgs / MoveBaseActionGoal,
    move_base_msgs / MoveBaseActionResult
);
